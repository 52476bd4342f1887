//! Pick command - interactive voice form

use crate::{
    VoxpickError,
    catalog::{self, Item},
    picker::PickerBuilder,
    ui::{FormResult, OutputWriter, PickerApp},
};

type Result<T> = std::result::Result<T, VoxpickError>;

/// Execute the pick command
///
/// Runs the terminal form and reports the outcome. Returns the chosen id,
/// or `None` if the user cancelled or left the field empty.
///
/// # Errors
///
/// Returns an error if the terminal fails or the picker cannot be built.
pub fn execute(
    items: &[Item],
    builder: PickerBuilder,
    app: &PickerApp,
    initial: Option<String>,
    out: &dyn OutputWriter,
) -> Result<Option<String>> {
    if items.is_empty() {
        out.warning("Catalog is empty");
    }

    let result = app.run(items, builder, initial)?;
    Ok(report(items, result, out))
}

/// Print a finished form result
pub fn report(items: &[Item], result: FormResult, out: &dyn OutputWriter) -> Option<String> {
    if result.aborted {
        out.info("Cancelled");
        return None;
    }

    let id = result.value?;
    if let Some(item) = catalog::find(items, &id) {
        out.success(&format!("Selected {}", item.display_name));
    }
    out.write(&id);
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::rachel_and_adam;
    use crate::ui::output::recording::{Line, RecordingWriter};

    #[test]
    fn test_report_selection() {
        let out = RecordingWriter::default();
        let result = FormResult {
            value: Some("v2".to_string()),
            aborted: false,
        };

        assert_eq!(report(&rachel_and_adam(), result, &out).as_deref(), Some("v2"));
        assert_eq!(
            *out.lines.borrow(),
            vec![
                Line::Success("Selected Adam".to_string()),
                Line::Write("v2".to_string())
            ]
        );
    }

    #[test]
    fn test_report_cancelled() {
        let out = RecordingWriter::default();
        let result = FormResult {
            value: Some("v1".to_string()),
            aborted: true,
        };
        assert!(report(&rachel_and_adam(), result, &out).is_none());
        assert!(out.written().is_empty());
    }

    #[test]
    fn test_report_empty_field() {
        let out = RecordingWriter::default();
        let result = FormResult {
            value: None,
            aborted: false,
        };
        assert!(report(&rachel_and_adam(), result, &out).is_none());
        assert!(out.lines.borrow().is_empty());
    }
}
