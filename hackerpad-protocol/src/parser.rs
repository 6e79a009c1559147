//! Byte-fed parser for host commands
//!
//! Bytes arrive from the USB console in arbitrary chunks. The parser keeps
//! the partial line (or partial bitmap) between calls so the tick loop can
//! feed whatever is buffered without ever waiting for a full command.

use heapless::Vec;

use crate::command::{ActionText, HostCommand, ImageData, IMAGE_BYTES, MAX_ACTION_LEN};

/// Longest accepted command line, excluding the terminator
pub const MAX_LINE_LEN: usize = 64;

/// Errors reported while parsing host input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// Keyword not recognised
    UnknownCommand,
    /// Line exceeded [`MAX_LINE_LEN`] and was discarded
    LineTooLong,
    /// Arguments missing or not in the expected shape
    Malformed,
    /// `IMG` length does not match the panel size
    BadLength,
    /// `MAP` text longer than [`MAX_ACTION_LEN`]
    TextTooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Accumulating a command line
    ReadingLine,
    /// Line overflowed; dropping bytes until the next newline
    Discarding,
    /// Collecting raw `IMG` payload bytes
    ReadingImage,
}

/// State machine for parsing host commands
#[derive(Debug, Clone)]
pub struct CommandParser {
    state: ParseState,
    line: Vec<u8, MAX_LINE_LEN>,
    image: ImageData,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    /// Create a new command parser
    pub fn new() -> Self {
        Self {
            state: ParseState::ReadingLine,
            line: Vec::new(),
            image: Vec::new(),
        }
    }

    /// Reset the parser state, dropping any partial command
    pub fn reset(&mut self) {
        self.state = ParseState::ReadingLine;
        self.line.clear();
        self.image.clear();
    }

    /// True while an `IMG` payload is being received
    pub fn is_receiving_image(&self) -> bool {
        self.state == ParseState::ReadingImage
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(cmd))` when a command is complete, `Ok(None)` when
    /// more bytes are needed, or `Err` when a line was rejected. The parser
    /// is ready for the next line after an error.
    pub fn feed(&mut self, byte: u8) -> Result<Option<HostCommand>, ProtocolError> {
        match self.state {
            ParseState::ReadingLine => match byte {
                b'\n' => {
                    let line = core::mem::take(&mut self.line);
                    self.parse_line(&line)
                }
                b'\r' => Ok(None),
                _ => {
                    if self.line.push(byte).is_err() {
                        self.line.clear();
                        self.state = ParseState::Discarding;
                    }
                    Ok(None)
                }
            },
            ParseState::Discarding => {
                if byte == b'\n' {
                    self.state = ParseState::ReadingLine;
                    return Err(ProtocolError::LineTooLong);
                }
                Ok(None)
            }
            ParseState::ReadingImage => {
                // Capacity equals IMAGE_BYTES, and we leave this state once full
                let _ = self.image.push(byte);
                if self.image.len() == IMAGE_BYTES {
                    self.state = ParseState::ReadingLine;
                    return Ok(Some(HostCommand::Image(core::mem::take(&mut self.image))));
                }
                Ok(None)
            }
        }
    }

    fn parse_line(&mut self, line: &[u8]) -> Result<Option<HostCommand>, ProtocolError> {
        if line.is_empty() {
            return Ok(None);
        }

        let line = core::str::from_utf8(line).map_err(|_| ProtocolError::Malformed)?;
        let (keyword, args) = line.split_once(' ').unwrap_or((line, ""));

        match keyword {
            "MAP" => parse_map(args).map(Some),
            "IMG" => {
                let len: usize = args.trim().parse().map_err(|_| ProtocolError::Malformed)?;
                if len != IMAGE_BYTES {
                    return Err(ProtocolError::BadLength);
                }
                self.image.clear();
                self.state = ParseState::ReadingImage;
                Ok(None)
            }
            _ => Err(ProtocolError::UnknownCommand),
        }
    }
}

/// Parse `<key> <text>` (the text and its separator may be absent)
fn parse_map(args: &str) -> Result<HostCommand, ProtocolError> {
    let key = args.chars().next().ok_or(ProtocolError::Malformed)?;
    let after = &args[key.len_utf8()..];

    let text = if after.is_empty() {
        ""
    } else {
        after.strip_prefix(' ').ok_or(ProtocolError::Malformed)?
    };

    if text.len() > MAX_ACTION_LEN {
        return Err(ProtocolError::TextTooLong);
    }

    let mut action = ActionText::new();
    action
        .push_str(text)
        .map_err(|_| ProtocolError::TextTooLong)?;

    Ok(HostCommand::Map { key, text: action })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(parser: &mut CommandParser, bytes: &[u8]) -> Result<Option<HostCommand>, ProtocolError> {
        let mut last = Ok(None);
        for &b in bytes {
            last = parser.feed(b);
            if !matches!(last, Ok(None)) {
                return last;
            }
        }
        last
    }

    #[test]
    fn test_map_command() {
        let mut parser = CommandParser::new();
        let cmd = feed_all(&mut parser, b"MAP 5 hello world\n").unwrap().unwrap();
        match cmd {
            HostCommand::Map { key, text } => {
                assert_eq!(key, '5');
                assert_eq!(text.as_str(), "hello world");
            }
            _ => panic!("expected MAP"),
        }
    }

    #[test]
    fn test_map_with_empty_text_clears() {
        let mut parser = CommandParser::new();
        // The host GUI always sends the separator, even for empty text
        let cmd = feed_all(&mut parser, b"MAP 7 \n").unwrap().unwrap();
        assert_eq!(
            cmd,
            HostCommand::Map {
                key: '7',
                text: ActionText::new()
            }
        );

        let cmd = feed_all(&mut parser, b"MAP 7\n").unwrap().unwrap();
        assert!(matches!(cmd, HostCommand::Map { key: '7', .. }));
    }

    #[test]
    fn test_map_crlf() {
        let mut parser = CommandParser::new();
        let cmd = feed_all(&mut parser, b"MAP 1 abc\r\n").unwrap().unwrap();
        assert!(matches!(cmd, HostCommand::Map { key: '1', ref text } if text.as_str() == "abc"));
    }

    #[test]
    fn test_map_multichar_key_rejected() {
        let mut parser = CommandParser::new();
        assert_eq!(feed_all(&mut parser, b"MAP 55 x\n"), Err(ProtocolError::Malformed));
        assert_eq!(feed_all(&mut parser, b"MAP\n"), Err(ProtocolError::Malformed));
    }

    #[test]
    fn test_map_text_too_long() {
        let mut parser = CommandParser::new();
        let mut line: Vec<u8, 64> = Vec::new();
        line.extend_from_slice(b"MAP 3 ").unwrap();
        for _ in 0..(MAX_ACTION_LEN + 1) {
            line.push(b'x').unwrap();
        }
        line.push(b'\n').unwrap();
        assert_eq!(feed_all(&mut parser, &line), Err(ProtocolError::TextTooLong));
    }

    #[test]
    fn test_image_command() {
        let mut parser = CommandParser::new();
        assert_eq!(feed_all(&mut parser, b"IMG 512\n"), Ok(None));
        assert!(parser.is_receiving_image());

        let mut result = Ok(None);
        for i in 0..IMAGE_BYTES {
            result = parser.feed(i as u8);
            if i + 1 < IMAGE_BYTES {
                assert_eq!(result, Ok(None));
            }
        }

        match result.unwrap().unwrap() {
            HostCommand::Image(data) => {
                assert_eq!(data.len(), IMAGE_BYTES);
                assert_eq!(data[0], 0);
                assert_eq!(data[511], 255);
            }
            _ => panic!("expected IMG"),
        }
        assert!(!parser.is_receiving_image());
    }

    #[test]
    fn test_image_payload_may_contain_newlines() {
        let mut parser = CommandParser::new();
        feed_all(&mut parser, b"IMG 512\n").unwrap();
        let mut done = None;
        for _ in 0..IMAGE_BYTES {
            if let Some(cmd) = parser.feed(b'\n').unwrap() {
                done = Some(cmd);
            }
        }
        assert!(matches!(done, Some(HostCommand::Image(ref d)) if d.iter().all(|&b| b == b'\n')));
    }

    #[test]
    fn test_image_bad_length() {
        let mut parser = CommandParser::new();
        assert_eq!(feed_all(&mut parser, b"IMG 100\n"), Err(ProtocolError::BadLength));
        assert!(!parser.is_receiving_image());
        assert_eq!(feed_all(&mut parser, b"IMG abc\n"), Err(ProtocolError::Malformed));
    }

    #[test]
    fn test_unknown_command() {
        let mut parser = CommandParser::new();
        assert_eq!(feed_all(&mut parser, b"HELLO\n"), Err(ProtocolError::UnknownCommand));
        assert_eq!(feed_all(&mut parser, b"map 1 x\n"), Err(ProtocolError::UnknownCommand));
    }

    #[test]
    fn test_blank_lines_ignored() {
        let mut parser = CommandParser::new();
        assert_eq!(feed_all(&mut parser, b"\n\r\n"), Ok(None));
    }

    #[test]
    fn test_line_too_long_then_recovers() {
        let mut parser = CommandParser::new();
        for _ in 0..(MAX_LINE_LEN + 10) {
            assert_eq!(parser.feed(b'A'), Ok(None));
        }
        assert_eq!(parser.feed(b'\n'), Err(ProtocolError::LineTooLong));

        let cmd = feed_all(&mut parser, b"MAP 2 ok\n").unwrap();
        assert!(matches!(cmd, Some(HostCommand::Map { key: '2', .. })));
    }

    #[test]
    fn test_reset_drops_partial_image() {
        let mut parser = CommandParser::new();
        feed_all(&mut parser, b"IMG 512\n").unwrap();
        parser.feed(0xFF).unwrap();
        parser.reset();
        assert!(!parser.is_receiving_image());
        assert_eq!(feed_all(&mut parser, b"NOPE\n"), Err(ProtocolError::UnknownCommand));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;
        use std::string::ToString;

        proptest! {
            #[test]
            fn parser_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..700)) {
                let mut parser = CommandParser::new();
                for b in bytes {
                    let _ = parser.feed(b);
                }
            }

            #[test]
            fn map_roundtrips_printable_text(key in "[1-9]", text in "[ -~]{0,32}") {
                let mut parser = CommandParser::new();
                let mut result = Ok(None);
                for b in "MAP ".bytes().chain(key.bytes()).chain(" ".bytes()).chain(text.bytes()).chain("\n".bytes()) {
                    result = parser.feed(b);
                }
                let cmd = result.unwrap().unwrap();
                match cmd {
                    HostCommand::Map { key: k, text: t } => {
                        prop_assert_eq!(k.to_string(), key);
                        prop_assert_eq!(t.as_str(), text.as_str());
                    }
                    _ => prop_assert!(false),
                }
            }
        }
    }
}
