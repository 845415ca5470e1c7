pub use containers::*;
pub use util::null;

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use std::cell::RefCell;

  #[derive(Debug, Clone, Copy, PartialEq, Eq)]
  enum ExitCode {
    Success = 0,
    EmptyName = 1,
    NameNotAlphanumeric = 2,
  }

  impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
      code as i32
    }
  }

  fn alphanumeric(input: &String) -> Outcome<(), ExitCode> {
    if input.chars().all(char::is_alphanumeric) {
      Outcome::ok(())
    } else {
      Outcome::err(ExitCode::NameNotAlphanumeric)
    }
  }

  fn validate_name(input: &str, log: &RefCell<Vec<String>>) -> i32 {
    input
      .to_owned()
      .into_ok::<ExitCode>()
      .error_when(|s| s.trim().is_empty(), || ExitCode::EmptyName)
      .flatten_with(alphanumeric)
      .map(|_| ExitCode::Success)
      .full_cast::<i32>()
      .do_with_error(|code| log.borrow_mut().push(format!("bad {}", code)))
      .do_with(|code| log.borrow_mut().push(format!("good {}", code)))
      .merge()
  }

  #[test]
  fn name_validation_pipeline() {
    let log = RefCell::new(vec![]);
    assert_eq!(validate_name("alice", &log), 0);
    assert_eq!(validate_name("  ", &log), 1);
    assert_eq!(validate_name("al ice", &log), 2);
    assert_eq!(log.into_inner(), vec!["good 0", "bad 1", "bad 2"]);
  }

  #[test]
  fn parsed_input_into_either() {
    let either = parse::parse_int("12")
      .filter(|v| *v > 10, || "too small".to_owned())
      .to_either();
    assert_eq!(either.right_value(), Some(12));

    let firsts: Vec<_> = ["x", "3", "y"]
      .iter()
      .map(|s| parse::parse_int(s).to_maybe())
      .values()
      .collect();
    assert_eq!(firsts, vec![3]);
  }
}
