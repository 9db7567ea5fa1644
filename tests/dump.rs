use anyhow::Result;
use ironcollect::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn dump_string<T: std::fmt::Debug>(c: &Collection<T>, opts: &DumpOptions) -> Result<String> {
    let mut out = Vec::new();
    c.dump_to(&mut out, opts)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn dumps_sequence_entries_with_positions() -> Result<()> {
    let c = Collection::of(vec![1, 2, 3]);
    let text = dump_string(&c, &DumpOptions::default())?;
    assert_eq!(
        text,
        "[dump] Sequence with 3 entries\n[dump] 0: 1\n[dump] 1: 2\n[dump] 2: 3\n"
    );
    Ok(())
}

#[test]
fn dumps_mapping_entries_with_keys_and_label() -> Result<()> {
    let c = Collection::of(json!({ "name": "Sadio Mané", "number": 19 }));
    let opts = DumpOptions {
        label: Some("player".into()),
        ..Default::default()
    };
    let text = dump_string(&c, &opts)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "[player] Mapping with 2 entries");
    assert_eq!(lines[1], r#"[player] name: String("Sadio Mané")"#);
    assert_eq!(lines[2], "[player] number: Number(19)");
    assert_eq!(lines.len(), 3);
    Ok(())
}

#[test]
fn truncates_after_max_items() -> Result<()> {
    let c = Collection::times(10, |i| i);
    let opts = DumpOptions {
        max_items: Some(2),
        ..Default::default()
    };
    let text = dump_string(&c, &opts)?;
    assert_eq!(
        text.lines().last(),
        Some("[dump] ... (8 more entries)")
    );
    assert_eq!(text.lines().count(), 4);
    Ok(())
}

#[test]
fn dump_returns_the_collection_unchanged() {
    let c = Collection::of(vec!["a"]);
    let same = c.dump().clone();
    assert_eq!(same, c);
}
