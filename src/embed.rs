/// Hex byte values emitted per line.
const BYTES_PER_LINE: usize = 12;
/// Fixed indentation for each emitted line.
const INDENT: &str = "    ";

/// Format raw bytes as indented `0xNN` lines for pasting inside a
/// slice literal. Every line ends with a comma except the last, so a
/// trailing partial line carries no dangling separator. Empty input
/// produces no lines.
pub fn byte_array_lines(data: &[u8]) -> Vec<String> {
    let chunks: Vec<&[u8]> = data.chunks(BYTES_PER_LINE).collect();
    let mut lines = Vec::with_capacity(chunks.len());
    for (i, chunk) in chunks.iter().enumerate() {
        let values: Vec<String> = chunk.iter().map(|b| format!("0x{:02X}", b)).collect();
        let mut line = format!("{}{}", INDENT, values.join(", "));
        if i + 1 < chunks.len() {
            line.push(',');
        }
        lines.push(line);
    }
    lines
}

/// The same lines joined with newlines, ready to print as a block.
pub fn byte_array_literal(data: &[u8]) -> String {
    byte_array_lines(data).join("\n")
}
