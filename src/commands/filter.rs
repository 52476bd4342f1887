//! Filter command - list the voices a query would show

use crate::{
    VoxpickError,
    catalog::Item,
    output,
    picker::{self, Filtered, MatchMode, NO_RESULTS_MESSAGE},
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, VoxpickError>;

/// Execute the filter command
///
/// Returns the number of matching voices.
///
/// # Errors
///
/// Currently infallible; the signature matches the other commands.
pub fn execute(
    items: &[Item],
    query: &str,
    mode: MatchMode,
    quiet: bool,
    out: &dyn OutputWriter,
) -> Result<usize> {
    let results = picker::filter(items, query, mode);
    log::debug!("Filter {query:?} ({mode}) matched {}", results.len());

    match results {
        Filtered::NoResults => {
            out.warning(NO_RESULTS_MESSAGE);
            Ok(0)
        }
        Filtered::Matches(matches) => {
            out.info(&output::match_count(matches.len(), items.len()));
            for item in &matches {
                out.write(&output::voice_line(item, quiet));
            }
            Ok(matches.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{rachel_and_adam, sample_voices};
    use crate::ui::output::recording::{Line, RecordingWriter};

    #[test]
    fn test_filter_prints_ids_in_catalog_order() {
        let out = RecordingWriter::default();
        let count = execute(&sample_voices(), "O", MatchMode::Substring, true, &out).unwrap();

        assert_eq!(count, 3);
        assert_eq!(out.written(), vec!["v3", "v5", "v7"]);
    }

    #[test]
    fn test_filter_scenario_ra() {
        let out = RecordingWriter::default();
        execute(&rachel_and_adam(), "ra", MatchMode::Substring, true, &out).unwrap();
        assert_eq!(out.written(), vec!["v1"]);
    }

    #[test]
    fn test_filter_no_results() {
        let out = RecordingWriter::default();
        let count = execute(&[], "", MatchMode::Substring, false, &out).unwrap();
        assert_eq!(count, 0);
        assert_eq!(
            *out.lines.borrow(),
            vec![Line::Warning(NO_RESULTS_MESSAGE.to_string())]
        );
    }
}
