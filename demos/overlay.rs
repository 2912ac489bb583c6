//! Overlay per-instance settings onto a server's INI file.
//!
//! Run with: cargo run --example overlay

use launcher_ini::{from_str, Document, Operator};
use std::error::Error;

const INSTANCE: &str = "\
[Engine.GameEngine]
ServerName=Arena #2
ServerActors+=Stats.Recorder
ServerActors-=IpDrv.MasterServerUplink

[URL]
Port=7787
";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_env_filter("debug").init();

    let path = std::env::temp_dir().join("launcher_ini_overlay.ini");
    std::fs::write(
        &path,
        "[Engine.GameEngine]\nServerName=Default\nServerActors+=IpDrv.WebServer\n\
         ServerActors+=IpDrv.MasterServerUplink\n\n[URL]\nPort=7777\n",
    )?;

    let mut base = Document::open(&path)?;
    let overlay = from_str(INSTANCE);

    for section in overlay.sections() {
        let target = base.section_or_create(section.name());
        for (key, values) in section.iter() {
            for value in values {
                match value.operator() {
                    Operator::Assign => target.set(key, value.text(), Operator::Assign),
                    Operator::Append => target.add(key, value.text(), Operator::Append),
                    Operator::Remove => {
                        target.remove(key, value.text());
                    }
                }
            }
        }
    }

    base.save()?;
    println!("{}", std::fs::read_to_string(&path)?);
    Ok(())
}
