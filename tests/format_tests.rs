use launcher_ini::{from_str, to_string, Document, Operator, Section, ValueEntry};

fn entries(doc: &Document, section: &str, key: &str) -> Vec<(String, Operator)> {
    doc.section(section)
        .unwrap()
        .get_all(key)
        .iter()
        .map(|v| (v.text().to_string(), v.operator()))
        .collect()
}

#[test]
fn test_operator_inference() {
    let doc = from_str("[S]\ncount+=5\n");
    assert_eq!(entries(&doc, "S", "count"), vec![("5".to_string(), Operator::Append)]);

    let doc = from_str("[S]\ncount-=5\n");
    assert_eq!(entries(&doc, "S", "count"), vec![("5".to_string(), Operator::Remove)]);

    let doc = from_str("[S]\ncount=5\n");
    assert_eq!(entries(&doc, "S", "count"), vec![("5".to_string(), Operator::Assign)]);
}

#[test]
fn test_spaces_around_operator() {
    let doc = from_str("[S]\n  Path  +=  ../Maps/*.tmap  \n");
    assert_eq!(
        entries(&doc, "S", "path"),
        vec![("../Maps/*.tmap".to_string(), Operator::Append)]
    );
}

#[test]
fn test_value_may_contain_equals() {
    let doc = from_str("[S]\nURL=?game=Cruzade.CRZBloodLust?maxplayers=8\n");
    assert_eq!(
        doc.section("S").unwrap().get_string("url"),
        Some("?game=Cruzade.CRZBloodLust?maxplayers=8")
    );
}

#[test]
fn test_malformed_lines_skipped() {
    let doc = from_str("[S]\n=orphan\n+=orphan\njust text\n\nk=v\n");
    let s = doc.section("S").unwrap();
    assert_eq!(s.len(), 1);
    assert_eq!(s.get_string("k"), Some("v"));
}

#[test]
fn test_continuation() {
    let doc = from_str("[S]\ndesc=hello \\\nworld\n");
    assert_eq!(
        doc.section("S").unwrap().get_all("desc"),
        &[ValueEntry::new("hello\nworld", Operator::Assign)]
    );
}

#[test]
fn test_continuation_keeps_operator() {
    let doc = from_str("[S]\nlist-=a,\\\n   b,\\\n   c\n");
    assert_eq!(
        entries(&doc, "S", "list"),
        vec![("a,\nb,\nc".to_string(), Operator::Remove)]
    );
}

#[test]
fn test_comment_line_inside_continuation_is_dropped() {
    let doc = from_str("[S]\nk=first \\\n;second \\\nthird\n");
    assert_eq!(
        doc.section("S").unwrap().get_string("k"),
        Some("first\nthird")
    );
}

#[test]
fn test_duplicate_section_names() {
    let doc = from_str("[A]\nk=1\n[A]\nk=2");

    let names: Vec<_> = doc.sections().iter().map(Section::name).collect();
    assert_eq!(names, vec!["A", "A"]);
    assert_eq!(doc.sections()[0].get_string("k"), Some("1"));
    assert_eq!(doc.sections()[1].get_string("k"), Some("2"));

    let mut doc = doc;
    let latest = doc.get_section("A", false).unwrap();
    assert_eq!(latest.get_string("k"), Some("2"));
}

#[test]
fn test_repeated_keys_across_cases_keep_order() {
    let doc = from_str("[S]\nMap=A\nOther=x\nmap+=B\nMAP-=A\n");
    let s = doc.section("S").unwrap();
    assert_eq!(s.keys().collect::<Vec<_>>(), vec!["Map", "Other"]);
    assert_eq!(
        entries(&doc, "S", "Map"),
        vec![
            ("A".to_string(), Operator::Assign),
            ("B".to_string(), Operator::Append),
            ("A".to_string(), Operator::Remove),
        ]
    );
}

#[test]
fn test_single_line_round_trip() {
    let input = "[Engine]\nA=1\nA+=2\nB-=3\nEmpty=\n\n[Engine]\nA=4\n\n[Other]\n\n";
    let doc = from_str(input);
    let output = to_string(&doc);
    assert_eq!(output, input);

    let again = from_str(&output);
    assert_eq!(again.sections(), doc.sections());
}

#[test]
fn test_continuation_does_not_round_trip() {
    let doc = from_str("[S]\ndesc=hello \\\nworld\n");
    let written = to_string(&doc);
    assert_eq!(written, "[S]\ndesc=hello\nworld\n\n");

    // The raw newline splits the value: "world" has no '=' and is skipped.
    let reread = from_str(&written);
    let s = reread.section("S").unwrap();
    assert_eq!(s.get_string("desc"), Some("hello"));
    assert_ne!(reread.sections(), doc.sections());
}

#[test]
fn test_continued_assignment_is_not_rescanned() {
    // A raw newline that happens to precede "key=value" text becomes a new
    // entry on reread.
    let doc = from_str("[S]\nk=a \\\nx=y\n");
    assert_eq!(doc.section("S").unwrap().get_string("k"), Some("a\nx=y"));

    let reread = from_str(&to_string(&doc));
    let s = reread.section("S").unwrap();
    assert_eq!(s.get_string("k"), Some("a"));
    assert_eq!(s.get_string("x"), Some("y"));
}
