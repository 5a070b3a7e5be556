//! Static dataset corpora used across harnesses.

use std::path::{Path, PathBuf};

/// A small raw dataset covering a fully-populated record, decorated numeric
/// fields, and a record that relies on every default.
pub const RAW_CORPUS: &str = r#"[
  {
    "name": "Young Green Dragon",
    "cr": "8",
    "type": "Dragon",
    "size": "Large",
    "ac": "18 (natural armor)",
    "hp": "136 (16d10+48)",
    "speed": "40 ft., fly 80 ft., swim 40 ft.",
    "stats": { "str": "19", "dex": "12", "con": "17" },
    "alignment": "Lawful Evil",
    "legendary": "",
    "url": "https://www.aidedd.org/monster/young-green-dragon",
    "image": true
  },
  {
    "name": "Kobold",
    "cr": "1/8",
    "ac": 12,
    "hp": "5 (2d6-2)",
    "stats": { "str": "7", "dex": "??" },
    "legendary": "Legendary Resistance",
    "url": "https://www.aidedd.org/monster/kobold",
    "image": false
  },
  {
    "name": "Lich",
    "cr": "None",
    "legendary": "Legendary"
  }
]"#;

/// Same shape as [`RAW_CORPUS`] but the second record has no name.
pub const RAW_CORPUS_NAMELESS: &str = r#"[
  { "name": "Goblin", "cr": "1/4" },
  { "cr": "1/2", "type": "Humanoid" },
  { "name": "Orc", "cr": "1/2" }
]"#;

/// Local dataset as produced by the merge step: some records carry a `url`,
/// some a `slug`, all a `name`.
pub const LOCAL_CORPUS: &str = r#"[
  { "name": "Aboleth" },
  { "name": "Adult Black Dragon", "url": "https://www.aidedd.org/monster/dragon-black-adult" },
  { "name": "Goblin Boss", "slug": "goblin-chief" }
]"#;

/// Index page listing five monsters, three of which exist locally.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html><head><title>Monsters</title></head><body>
  <a href="/en/">Home</a>
  <div class="liste">
    <a href="../dnd/monstres.php?vo=aboleth">Aboleth</a>
    <a href="../dnd/monstres.php?vo=dragon-black-adult">Adult Black Dragon</a>
    <a href="../dnd/monstres.php?vo=goblin-chief">Goblin Boss</a>
    <a href="../dnd/monstres.php?vo=zombie">Zombie</a>
    <a href="../dnd/monstres.php?vo=xvart">Xvart</a>
  </div>
</body></html>"#;

pub const DETAIL_TEMPLATE: &str = "https://www.aidedd.org/dnd/monstres.php?vo={slug}";

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}
