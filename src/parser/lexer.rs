//! Line classification for Nmap's normal (human-readable) output.
//!
//! Every input line is one of three kinds: a host header
//! (`Nmap scan report for ...`), a port table row (`22/tcp open ssh ...`),
//! or anything else. Field extraction from headers lives here as well.

/// Literal that opens every host section.
pub const REPORT_PREFIX: &str = "Nmap scan report for";

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Starts a new host block.
    Header,
    /// A row of the port table.
    Port(PortLine<'a>),
    /// Anything else (banners, script output, blank lines).
    Other,
}

/// Classify a line.
///
/// A line starting with [`REPORT_PREFIX`] can never have the port-row
/// shape, so the two kinds are exclusive.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with(REPORT_PREFIX) {
        LineKind::Header
    } else if let Some(port) = PortLine::parse(line) {
        LineKind::Port(port)
    } else {
        LineKind::Other
    }
}

/// Fields of a port table row, borrowed from the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortLine<'a> {
    pub port: &'a str,
    pub proto: &'a str,
    pub state: &'a str,
    pub description: &'a str,
}

impl<'a> PortLine<'a> {
    /// Recognize `<digits>/<proto> <state> <description...>`.
    ///
    /// The port is a run of ASCII digits only; Unicode decimal digits such
    /// as `٨٠` are not port numbers here.
    ///
    /// A line qualifies when the text after the slash holds three
    /// whitespace-separated columns and the first one is non-empty. That
    /// first column may itself begin with whitespace, so `80/ tcp open http`
    /// qualifies (with an empty protocol) while `80/ open http` does not.
    ///
    /// Columns are then assigned shortest-first: the protocol ends at the
    /// earliest whitespace that leaves room for the rest, the state is the
    /// shortest run followed by whitespace and at least one more character,
    /// and the description is the verbatim remainder. When nothing else is
    /// left, a single whitespace character can serve as the state or the
    /// description (`80/tcp   open` has state `" "` and description `open`).
    pub fn parse(line: &'a str) -> Option<Self> {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }

        let (port, rest) = line.split_at(digits);
        let columns = Columns::new(rest.strip_prefix('/')?);
        if !columns.has_port_shape() {
            return None;
        }

        let (proto, state, description) = columns.split()?;
        Some(Self {
            port,
            proto,
            state,
            description,
        })
    }
}

/// The text after `<digits>/`, indexed by character.
struct Columns<'a> {
    text: &'a str,
    chars: Vec<(usize, char)>,
}

impl<'a> Columns<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().collect(),
        }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn is_space(&self, i: usize) -> bool {
        self.chars.get(i).is_some_and(|&(_, c)| c.is_whitespace())
    }

    fn offset(&self, i: usize) -> usize {
        self.chars.get(i).map_or(self.text.len(), |&(offset, _)| offset)
    }

    fn slice(&self, from: usize, to: usize) -> &'a str {
        &self.text[self.offset(from)..self.offset(to)]
    }

    /// Index just past the whitespace run starting at `from`.
    fn space_run_end(&self, from: usize) -> usize {
        (from..self.len())
            .find(|&i| !self.is_space(i))
            .unwrap_or(self.len())
    }

    /// Whitespace at some `a >= 1` and again at `b >= a + 2`, with at least
    /// one character after `b`.
    fn has_port_shape(&self) -> bool {
        let mut spaces = (1..self.len()).filter(|&i| self.is_space(i));
        match spaces.next() {
            Some(first) => spaces.any(|b| b >= first + 2 && b + 1 < self.len()),
            None => false,
        }
    }

    /// Assign protocol, state and description.
    fn split(&self) -> Option<(&'a str, &'a str, &'a str)> {
        let len = self.len();

        for proto_end in (0..len).filter(|&i| self.is_space(i)) {
            let gap_end = self.space_run_end(proto_end);

            // The gap gives back characters to the state only when needed.
            for state_start in (proto_end + 1..=gap_end).rev() {
                for state_end in state_start + 1..len {
                    if !self.is_space(state_end) {
                        continue;
                    }
                    let tail_gap_end = self.space_run_end(state_end);
                    let description_start = if tail_gap_end < len {
                        tail_gap_end
                    } else {
                        len - 1
                    };
                    if description_start > state_end {
                        return Some((
                            self.slice(0, proto_end),
                            self.slice(state_start, state_end),
                            self.slice(description_start, len),
                        ));
                    }
                }
            }
        }

        None
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Find the first IPv4-looking dotted quad in a line.
///
/// Groups are one to three ASCII digits with no range check, and the match
/// must start and end on a word boundary, so `1234.1.1.1` and `a1.2.3.4`
/// are not addresses but `999.999.999.999` is.
pub fn extract_ipv4(line: &str) -> Option<&str> {
    let mut prev: Option<char> = None;

    for (start, c) in line.char_indices() {
        if c.is_ascii_digit() && !prev.is_some_and(is_word_char) {
            if let Some(len) = dotted_quad_len(&line[start..]) {
                return Some(&line[start..start + len]);
            }
        }
        prev = Some(c);
    }

    None
}

/// Length of a dotted quad at the start of `s`, if there is one.
fn dotted_quad_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut pos = 0;

    for group in 0..4 {
        if group > 0 {
            if bytes.get(pos) != Some(&b'.') {
                return None;
            }
            pos += 1;
        }
        let digits = bytes[pos..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if !(1..=3).contains(&digits) {
            return None;
        }
        pos += digits;
    }

    match s[pos..].chars().next() {
        Some(c) if is_word_char(c) => None,
        _ => Some(pos),
    }
}

/// Extract the resolved name from `Nmap scan report for <name> (<ip>)`.
///
/// Returns `None` for headers without a parenthesized address, which is how
/// Nmap prints hosts it could not resolve.
pub fn extract_hostname(header: &str) -> Option<&str> {
    let rest = header.strip_prefix(REPORT_PREFIX)?.strip_prefix(' ')?;
    rest.match_indices(" (")
        .find(|(idx, _)| *idx > 0)
        .map(|(idx, _)| &rest[..idx])
}
