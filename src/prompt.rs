//! One-line confirmation prompt

use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Returns true if `answer` accepts the question (`y`/`yes`, any case)
pub fn is_confirmation(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Write `question` and read one line of answer
///
/// End of input counts as a refusal.
pub async fn confirm<R, W>(reader: &mut R, writer: &mut W, question: &str) -> std::io::Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(writer, "{}", question)?;
    writer.flush()?;

    let mut answer = String::new();
    let read = reader.read_line(&mut answer).await?;
    if read == 0 {
        writeln!(writer)?;
        return Ok(false);
    }

    Ok(is_confirmation(&answer))
}
