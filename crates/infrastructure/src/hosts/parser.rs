use hostsdns_domain::{AddressRecord, DomainError, HostsWarning, ParsedHosts};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

/// Line-at-a-time hosts file parser.
///
/// Format: `<address> <hostname> [<hostname> ...]`, `#` starts a comment.
/// Malformed lines are recorded as warnings and skipped; they never fail the parse.
#[derive(Debug, Default)]
pub struct HostsParser {
    parsed: ParsedHosts,
    line_no: usize,
}

impl HostsParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse_line(&mut self, raw: &str) {
        self.line_no += 1;

        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        let fields: Vec<&str> = line
            .split_whitespace()
            .take_while(|field| !field.starts_with('#'))
            .collect();

        if fields.len() < 2 {
            warn!(line = self.line_no, entry = line, "Invalid hosts file entry");
            self.parsed.warnings.push(HostsWarning::MalformedEntry {
                line: self.line_no,
                content: line.to_string(),
            });
            return;
        }

        let address = fields[0];
        let record = match AddressRecord::parse(address) {
            Some(record) => record,
            None => {
                warn!(line = self.line_no, address, "Unknown IP address type");
                self.parsed.warnings.push(HostsWarning::UnclassifiableAddress {
                    line: self.line_no,
                    address: address.to_string(),
                });
                return;
            }
        };

        for hostname in &fields[1..] {
            self.parsed.table.insert(hostname, record);
        }
    }

    pub fn finish(self) -> ParsedHosts {
        self.parsed
    }
}

/// Parses hosts file content already held in memory.
pub fn parse_hosts(content: &str) -> ParsedHosts {
    let mut parser = HostsParser::new();
    for line in content.lines() {
        parser.parse_line(line);
    }
    parser.finish()
}

/// Reads and parses the hosts file at `path`.
///
/// Open failures map to [`DomainError::FileAccess`], read failures after the
/// file is open map to [`DomainError::Scan`]. Bytes that are not valid UTF-8
/// are replaced rather than aborting the scan.
pub async fn read_hosts_file(path: &str) -> Result<ParsedHosts, DomainError> {
    let file = File::open(path)
        .await
        .map_err(|e| DomainError::file_access(path, e))?;

    let mut reader = BufReader::new(file);
    let mut parser = HostsParser::new();
    let mut buf = Vec::with_capacity(256);

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .await
            .map_err(|e| DomainError::scan(path, e))?;
        if read == 0 {
            break;
        }
        parser.parse_line(&String::from_utf8_lossy(&buf));
    }

    let parsed = parser.finish();
    debug!(
        path,
        entries = parsed.table.len(),
        warnings = parsed.warnings.len(),
        "Hosts file parsed"
    );
    Ok(parsed)
}
