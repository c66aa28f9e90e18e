use encoding_rs::{CoderResult, Decoder, Encoding, UTF_8};

/// Incremental text decoder for a response body delivered in chunks.
///
/// Multi-byte sequences split across chunk boundaries are carried over to the
/// next call. Malformed input becomes U+FFFD. A leading BOM selects its own
/// encoding and is stripped.
pub struct StreamDecoder {
    decoder: Decoder,
    had_errors: bool,
}

impl StreamDecoder {
    pub fn new(encoding: &'static Encoding) -> Self {
        Self {
            decoder: encoding.new_decoder(),
            had_errors: false,
        }
    }

    /// Decoder for a `Content-Type` header value: its `charset`, else UTF-8.
    pub fn for_content_type(content_type: Option<&str>) -> Self {
        let encoding = content_type
            .and_then(extract_charset)
            .and_then(|label| Encoding::for_label(label.as_bytes()))
            .unwrap_or(UTF_8);
        Self::new(encoding)
    }

    pub fn encoding_name(&self) -> &'static str {
        self.decoder.encoding().name()
    }

    pub fn had_errors(&self) -> bool {
        self.had_errors
    }

    pub fn decode_chunk(&mut self, bytes: &[u8]) -> String {
        self.decode(bytes, false)
    }

    /// Flushes any dangling partial sequence.
    pub fn finish(mut self) -> String {
        self.decode(&[], true)
    }

    fn decode(&mut self, mut src: &[u8], last: bool) -> String {
        let mut out = String::new();
        loop {
            let needed = self
                .decoder
                .max_utf8_buffer_length(src.len())
                .unwrap_or_else(|| src.len().saturating_mul(3).saturating_add(4));
            out.reserve(needed);
            let (result, read, had_errors) = self.decoder.decode_to_string(src, &mut out, last);
            self.had_errors |= had_errors;
            src = &src[read..];
            match result {
                CoderResult::InputEmpty => return out,
                CoderResult::OutputFull => continue,
            }
        }
    }
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim().trim_matches(&['"', '\''][..]).to_string())
        })
        .find(|label| !label.is_empty())
}
