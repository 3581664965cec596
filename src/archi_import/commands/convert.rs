use crate::commands::{CmdMessage, Reporter};
use crate::error::{ArchiError, Result};
use crate::model::ElementRecord;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Encodes `names` as an Archi elements CSV document.
///
/// Every field is quoted and every line ends with `\n`. Names are embedded
/// as given; quotes inside a name are doubled by the encoder.
pub fn run(
    names: &[String],
    element_type: &str,
    specialization: &str,
    reporter: &mut dyn Reporter,
) -> Result<String> {
    reporter.report(CmdMessage::info("Converting names to csv..."));

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(ElementRecord::HEADERS)?;
    for name in names {
        writer.serialize(ElementRecord::new(element_type, name, specialization))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ArchiError::Csv(e.into_error().into()))?;
    let csv = String::from_utf8(bytes)?;

    if !names.is_empty() {
        reporter.report(CmdMessage::success("Converted names to csv successfully!"));
    }
    Ok(csv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{MessageLog, Silent};

    const HEADER: &str = "\"ID\",\"Type\",\"Name\",\"Documentation\",\"Specialization\"\n";

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_names_produce_header_only() {
        let csv = run(&[], "Node", "", &mut Silent).unwrap();
        assert_eq!(csv, HEADER);
    }

    #[test]
    fn test_one_record_per_name_in_order() {
        let input = names(&["Login Service", "Payment Gateway", "Login Service"]);
        let csv = run(&input, "Application Component", "Microservice", &mut Silent).unwrap();

        let expected = format!(
            "{HEADER}\
             \"\",\"Application Component\",\"Login Service\",\"\",\"Microservice\"\n\
             \"\",\"Application Component\",\"Payment Gateway\",\"\",\"Microservice\"\n\
             \"\",\"Application Component\",\"Login Service\",\"\",\"Microservice\"\n"
        );
        assert_eq!(csv, expected);
        assert_eq!(csv.lines().count(), input.len() + 1);
    }

    #[test]
    fn test_line_terminators_in_names_are_embedded_verbatim() {
        let input = names(&["Login Service\n", "Payment Gateway\n"]);
        let csv = run(&input, "Application Component", "", &mut Silent).unwrap();

        let expected = format!(
            "{HEADER}\
             \"\",\"Application Component\",\"Login Service\n\",\"\",\"\"\n\
             \"\",\"Application Component\",\"Payment Gateway\n\",\"\",\"\"\n"
        );
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_quotes_in_names_are_escaped() {
        let input = names(&["The \"Core\" System"]);
        let csv = run(&input, "Node", "", &mut Silent).unwrap();
        assert!(csv.ends_with("\"\",\"Node\",\"The \"\"Core\"\" System\",\"\",\"\"\n"));
    }

    #[test]
    fn test_commas_stay_inside_the_name_field() {
        let input = names(&["Billing, Invoicing"]);
        let csv = run(&input, "Node", "", &mut Silent).unwrap();

        let mut reader = csv::ReaderBuilder::new().from_reader(csv.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.len(), 5);
        assert_eq!(&record[2], "Billing, Invoicing");
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let input = names(&["a", "b"]);
        let first = run(&input, "Node", "Server", &mut Silent).unwrap();
        let second = run(&input, "Node", "Server", &mut Silent).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_success_is_only_reported_when_records_were_written() {
        let mut log = MessageLog::new();
        run(&[], "Node", "", &mut log).unwrap();
        assert_eq!(log.contents(), vec!["Converting names to csv..."]);

        let mut log = MessageLog::new();
        run(&names(&["a"]), "Node", "", &mut log).unwrap();
        assert_eq!(
            log.contents(),
            vec![
                "Converting names to csv...",
                "Converted names to csv successfully!"
            ]
        );
    }
}
