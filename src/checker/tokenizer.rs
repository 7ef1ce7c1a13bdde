use std::io::{self, BufRead};

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'\''
}

/// Iterator over the words of a byte stream.
///
/// A word is a maximal run of ASCII alphanumerics or apostrophes; every
/// other byte is a delimiter. Words come out lowercased. The iterator ends
/// at end of stream, flushing a final word that runs into EOF.
pub struct Words<R: BufRead> {
    reader: R,
}

impl<R: BufRead> Words<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut word = String::new();

        loop {
            let (consumed, word_complete) = {
                let buf = match self.reader.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) => return Some(Err(e)),
                };

                if buf.is_empty() {
                    // EOF
                    return if word.is_empty() { None } else { Some(Ok(word)) };
                }

                let mut consumed = 0;
                let mut word_complete = false;
                for &byte in buf {
                    consumed += 1;
                    if is_word_byte(byte) {
                        word.push(byte.to_ascii_lowercase() as char);
                    } else if !word.is_empty() {
                        // Delimiter after a word; eat it and yield.
                        word_complete = true;
                        break;
                    }
                }
                (consumed, word_complete)
            };

            self.reader.consume(consumed);
            if word_complete {
                return Some(Ok(word));
            }
        }
    }
}
