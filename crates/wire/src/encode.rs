//! Textual encoding of event records.

use pmemtrace_core::Event;

/// Encode an event as one colon-delimited record line.
///
/// Field order is fixed per record shape:
///
/// - addressed: `TAG:0xADDR:SIZE:FILE:LINE`
/// - completion-bearing: `TAG:0xADDR:DONE:REQUESTED:FILE:LINE`
/// - boundary: `TAG:FILE:LINE`
///
/// The completed count precedes the requested one for flush and
/// non-temporal records.
pub fn encode(event: &Event) -> String {
    let tag = event.kind().tag();
    let origin = event.origin();
    match (event.address(), event.secondary_size()) {
        (Some(address), Some(completed)) => format!(
            "{}:{:#x}:{}:{}:{}:{}",
            tag,
            address,
            completed,
            event.primary_size(),
            origin.file(),
            origin.line(),
        ),
        (Some(address), None) => format!(
            "{}:{:#x}:{}:{}:{}",
            tag,
            address,
            event.primary_size(),
            origin.file(),
            origin.line(),
        ),
        (None, _) => format!("{}:{}:{}", tag, origin.file(), origin.line()),
    }
}
