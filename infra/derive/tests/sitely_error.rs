use sitely_derive::sitely_error;
use std::borrow::Cow;

#[sitely_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Denied{}: {message}", format_context(.context))]
    Denied { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_missing() -> Result<(), DemoError> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")).context("reading plan cache")
}

#[test]
fn sitely_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/error_pass.rs");
}

#[test]
fn source_errors_pick_up_context() {
    let err = read_missing().unwrap_err();
    assert!(matches!(err, DemoError::Io { context: Some(_), .. }));
    assert_eq!(err.to_string(), "IO error (reading plan cache): gone");
}

#[test]
fn question_mark_converts_sources() {
    fn open() -> Result<u8, DemoError> {
        let byte: u8 = Err(std::io::Error::other("disk"))?;
        Ok(byte)
    }
    assert_eq!(open().unwrap_err().to_string(), "IO error: disk");
}

#[test]
fn context_can_be_attached_to_own_variants() {
    let result: Result<(), DemoError> =
        Err(DemoError::Denied { message: "card declined".into(), context: None });
    let err = result.context("upgrading to pro").unwrap_err();
    assert_eq!(err.to_string(), "Denied (upgrading to pro): card declined");
}

#[test]
fn strings_become_internal_errors() {
    let from_static: DemoError = "static".into();
    let from_owned: DemoError = String::from("owned").into();
    assert!(matches!(from_static, DemoError::Internal { .. }));
    assert_eq!(from_owned.to_string(), "Internal error: owned");
}
