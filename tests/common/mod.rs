//! Shared fixture data directory for integration tests.

#![allow(dead_code)]

use std::path::Path;

use tempfile::TempDir;

pub const DAY_05_03: &str = r#"
id: "a"
day: 3
month: 5
year: 1568
title: "T"
content: "See [s1]."
contentTwitter: "Short T"
people: "Jan Kochanowski"
sources:
  - id: "s1"
    value: "V"
    url: "http://x"
"#;

pub const DAY_01_01: &str = r#"
id: "wedding"
day: 1
month: 1
year: 1550
title: "Ślub"
content: "Uroczystości *w Krakowie*."
contentTwitter: "1550"
people: "Zygmunt August; Barbara Radziwiłłówna"
location: "Kraków"
geo: "50.054,19.935"
---
id: "other"
day: 1
month: 1
year: 1600
title: "Nowy rok"
content: "Bez postaci."
contentTwitter: "1600"
"#;

pub const DAY_03_03: &str = r#"
id: "sejm"
day: 3
month: 3
year: 1575
title: "Sejm"
content: "Obrady [a] i [b] oraz [a]."
contentTwitter: "1575"
people: "Zygmunt August"
sources:
  - id: "a"
    value: "Kronika"
  - id: "b"
    value: "Diariusz"
"#;

pub const DAY_06_15: &str = r#"
id: "late"
day: 15
month: 6
year: 1600
title: "Późno"
content: "Wydarzenie."
contentTwitter: "1600b"
people: "Zygmunt August"
"#;

pub const QUOTES: &str = r#"
content: "Cnota skarb wielki"
source: "Jan Kochanowski"
---
content: "Polak mądry po szkodzie"
source: "Jan Kochanowski"
"#;

pub const BOOKS: &str = r#"
author: "Jan Kochanowski"
title: "Treny"
year: "1580"
URL: "https://polona.pl/treny"
pages: 48
"#;

pub fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

/// Data directory with four populated days, one empty day-file,
/// quotes and books. Files are processed 01-01, 03-03, 05-03, 06-15, 07-04.
pub fn data_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    // Written out of order on purpose; loading sorts by name
    write(dir, "06-15.yaml", DAY_06_15);
    write(dir, "01-01.yaml", DAY_01_01);
    write(dir, "05-03.yaml", DAY_05_03);
    write(dir, "03-03.yaml", DAY_03_03);
    write(dir, "07-04.yaml", "");
    write(dir, "quotes.yaml", QUOTES);
    write(dir, "books.yaml", BOOKS);

    temp
}
