use super::*;

// =============================================================
// find
// =============================================================

#[test]
fn find_returns_none_for_empty_jar() {
    assert_eq!(find("", "shooterMode"), None);
}

#[test]
fn find_single_entry() {
    assert_eq!(find("shooterMode=false", "shooterMode"), Some("false"));
}

#[test]
fn find_entry_in_any_position() {
    let jar = "theme=dark; shooterMode=true; session=abc";
    assert_eq!(find(jar, "shooterMode"), Some("true"));
    assert_eq!(find(jar, "theme"), Some("dark"));
    assert_eq!(find(jar, "session"), Some("abc"));
}

#[test]
fn find_tolerates_arbitrary_leading_spaces() {
    let jar = "a=1;    shooterMode=false;  b=2";
    assert_eq!(find(jar, "shooterMode"), Some("false"));
    assert_eq!(find(jar, "b"), Some("2"));
}

#[test]
fn find_first_match_wins() {
    let jar = "shooterMode=false; shooterMode=true";
    assert_eq!(find(jar, "shooterMode"), Some("false"));
}

#[test]
fn find_does_not_match_name_prefix() {
    let jar = "shooterModeLegacy=false; xshooterMode=false";
    assert_eq!(find(jar, "shooterMode"), None);
}

#[test]
fn find_keeps_equals_signs_in_value() {
    assert_eq!(find("token=a=b=c", "token"), Some("a=b=c"));
}

#[test]
fn find_empty_value_is_present() {
    assert_eq!(find("shooterMode=; other=1", "shooterMode"), Some(""));
}

#[test]
fn find_without_equals_is_absent() {
    assert_eq!(find("shooterMode; other=1", "shooterMode"), None);
}

// =============================================================
// Directive
// =============================================================

#[test]
fn directive_formats_like_document_cookie() {
    let directive = Directive::new("shooterMode", "false", "Tue, 19 Oct 2027 12:00:00 GMT");
    assert_eq!(
        directive.to_string(),
        "shooterMode=false;expires=Tue, 19 Oct 2027 12:00:00 GMT;path=/;SameSite=Lax"
    );
}
