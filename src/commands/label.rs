//! Label command - resolve what the trigger shows for a value

use crate::{
    VoxpickError,
    catalog::{self, Item},
    output,
    picker::PickerBuilder,
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, VoxpickError>;

/// Execute the label command
///
/// Unknown ids print the placeholder, like the trigger does, plus a warning.
///
/// # Errors
///
/// Returns an error if the picker cannot be built from `builder`.
pub fn execute(
    items: &[Item],
    id: Option<&str>,
    builder: PickerBuilder,
    quiet: bool,
    out: &dyn OutputWriter,
) -> Result<String> {
    let picker = builder.build()?;
    let label = picker.trigger_label(items, id).to_string();
    let known = id.is_some_and(|id| catalog::find(items, id).is_some());

    if let Some(id) = id
        && !known
    {
        out.warning(&format!("Unknown voice id '{id}'"));
    }

    if quiet {
        out.write(&label);
    } else {
        out.write(&output::colorize_label(&label, !known));
    }
    Ok(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::{DEFAULT_PLACEHOLDER, Picker};
    use crate::testing::rachel_and_adam;
    use crate::ui::output::recording::{Line, RecordingWriter};

    #[test]
    fn test_label_known_value() {
        let out = RecordingWriter::default();
        let label = execute(&rachel_and_adam(), Some("v2"), Picker::builder(), true, &out).unwrap();
        assert_eq!(label, "Adam");
        assert_eq!(out.written(), vec!["Adam"]);
    }

    #[test]
    fn test_label_unknown_value_falls_back() {
        let out = RecordingWriter::default();
        let label = execute(&rachel_and_adam(), Some("v9"), Picker::builder(), true, &out).unwrap();
        assert_eq!(label, DEFAULT_PLACEHOLDER);
        assert!(
            out.lines
                .borrow()
                .contains(&Line::Warning("Unknown voice id 'v9'".to_string()))
        );
    }

    #[test]
    fn test_label_no_value_uses_custom_placeholder() {
        let out = RecordingWriter::default();
        let builder = Picker::builder().placeholder("Pick one");
        let label = execute(&rachel_and_adam(), None, builder, true, &out).unwrap();
        assert_eq!(label, "Pick one");
        assert_eq!(out.written(), vec!["Pick one"]);
    }

    #[test]
    fn test_label_rejects_partial_control() {
        let out = RecordingWriter::default();
        let builder = Picker::builder().open(true);
        assert!(execute(&rachel_and_adam(), None, builder, true, &out).is_err());
    }
}
