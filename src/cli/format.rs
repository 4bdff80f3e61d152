//! Format output dispatch helpers
//!
//! Provides macros to eliminate repetitive format match blocks.

/// Macro for format dispatch that automatically wraps result handling.
/// Use when json branch returns Result and human/records return ().
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => {
///         println!("{}", serde_json::to_string_pretty(&data)?);
///         Ok(())
///     },
///     human => { println!("Done"); },
///     records => { println!("H relnote=1 mode=done"); }
/// )
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
