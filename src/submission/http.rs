//! Detection backend seam and its blocking HTTP/1.1 implementation.
//!
//! The client speaks just enough HTTP for a single POST per connection:
//! `Connection: close`, response bodies framed by `Content-Length`, chunked
//! transfer encoding, or end of stream. Plain `http://` only.

use super::error::{SubmissionError, SubmissionResult};
use super::multipart;
use super::wire::{DetectionRequest, DetectionResponse};
use crate::constants::MAX_RESPONSE_BYTES;
use crate::settings::BackendSettings;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;
use tracing::{debug, info};

/// Anything that can turn a detection request into a response.
pub trait DetectionBackend {
    fn submit(&self, request: &DetectionRequest) -> SubmissionResult<DetectionResponse>;
}

/// Parsed `http://host[:port]/path` URL.
///
/// IPv6 hosts are written in brackets (`http://[::1]:5000/process`) and
/// stored without them. A query directly after the authority starts the
/// path and fragments are dropped. Userinfo (`user@host`) is not supported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl Endpoint {
    pub fn parse(url: &str) -> SubmissionResult<Self> {
        let invalid = || SubmissionError::InvalidEndpoint(url.to_string());

        let rest = url.trim().strip_prefix("http://").ok_or_else(invalid)?;
        let rest = rest.split('#').next().unwrap_or_default();
        let split = rest.find(['/', '?']).unwrap_or(rest.len());
        let (authority, path) = rest.split_at(split);
        let path = match path.chars().next() {
            None => "/".to_string(),
            Some('/') => path.to_string(),
            Some(_) => format!("/{path}"),
        };

        let (host, port) = match authority.strip_prefix('[') {
            Some(bracketed) => {
                let (host, tail) = bracketed.split_once(']').ok_or_else(invalid)?;
                match tail {
                    "" => (host, None),
                    _ => (host, Some(tail.strip_prefix(':').ok_or_else(invalid)?)),
                }
            }
            None => match authority.rsplit_once(':') {
                Some((host, _)) if host.contains(':') => return Err(invalid()),
                Some((host, port)) => (host, Some(port)),
                None => (authority, None),
            },
        };
        if host.is_empty() || host.contains(['@', '[', ']']) {
            return Err(invalid());
        }
        let port = match port {
            Some(port) => port.parse::<u16>().map_err(|_| invalid())?,
            None => 80,
        };

        Ok(Self {
            host: host.to_string(),
            port,
            path,
        })
    }

    /// `Host` header value
    fn authority(&self) -> String {
        let host = if self.host.contains(':') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        if self.port == 80 {
            host
        } else {
            format!("{host}:{}", self.port)
        }
    }
}

/// Blocking HTTP backend. One connection per request.
#[derive(Clone, Debug)]
pub struct HttpDetectionBackend {
    endpoint: Endpoint,
    timeout: Duration,
}

impl HttpDetectionBackend {
    pub fn new(url: &str, timeout: Duration) -> SubmissionResult<Self> {
        Ok(Self {
            endpoint: Endpoint::parse(url)?,
            timeout,
        })
    }

    pub fn from_settings(settings: &BackendSettings) -> SubmissionResult<Self> {
        Self::new(&settings.endpoint, settings.timeout())
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn connect(&self) -> SubmissionResult<TcpStream> {
        let mut last_err = None;
        for addr in (self.endpoint.host.as_str(), self.endpoint.port).to_socket_addrs()? {
            match TcpStream::connect_timeout(&addr, self.timeout) {
                Ok(stream) => {
                    stream.set_read_timeout(Some(self.timeout))?;
                    stream.set_write_timeout(Some(self.timeout))?;
                    return Ok(stream);
                }
                Err(e) => last_err = Some(e),
            }
        }
        Err(match last_err {
            Some(e) => e.into(),
            None => SubmissionError::InvalidEndpoint(self.endpoint.host.clone()),
        })
    }
}

impl DetectionBackend for HttpDetectionBackend {
    fn submit(&self, request: &DetectionRequest) -> SubmissionResult<DetectionResponse> {
        let boundary = multipart::generate_boundary();
        let body = request.to_multipart(&boundary)?;

        let mut stream = self.connect()?;
        let head = format!(
            "POST {path} HTTP/1.1\r\n\
             Host: {host}\r\n\
             Content-Type: {content_type}\r\n\
             Content-Length: {len}\r\n\
             Accept: application/json\r\n\
             Connection: close\r\n\r\n",
            path = self.endpoint.path,
            host = self.endpoint.authority(),
            content_type = multipart::content_type(&boundary),
            len = body.len(),
        );
        stream.write_all(head.as_bytes())?;
        stream.write_all(&body)?;
        stream.flush()?;
        debug!(
            endpoint = %self.endpoint.path,
            bytes = body.len(),
            areas = request.crop_areas.len(),
            "detection request sent"
        );

        let (status, body) = read_response(BufReader::new(stream))?;
        if !(200..300).contains(&status) {
            return Err(SubmissionError::Http { status });
        }

        let response = DetectionResponse::from_slice(&body)?;
        info!(status, results = ?response.results.as_ref().map(Vec::len), "detection response received");
        Ok(response)
    }
}

/// Read status code and body of an HTTP/1.x response.
fn read_response<R: BufRead>(mut reader: R) -> SubmissionResult<(u16, Vec<u8>)> {
    let status_line = read_line(&mut reader)?;
    let status = parse_status_line(&status_line)?;

    let mut content_length = None;
    let mut chunked = false;
    loop {
        let line = read_line(&mut reader)?;
        if line.is_empty() {
            break;
        }
        let Some((name, value)) = line.split_once(':') else {
            return Err(SubmissionError::MalformedResponse(format!("bad header: {line}")));
        };
        let value = value.trim();
        if name.eq_ignore_ascii_case("content-length") {
            let len = value
                .parse::<usize>()
                .map_err(|_| SubmissionError::MalformedResponse(format!("bad length: {value}")))?;
            content_length = Some(len);
        } else if name.eq_ignore_ascii_case("transfer-encoding") {
            chunked = value.to_ascii_lowercase().contains("chunked");
        }
    }

    let body = if chunked {
        read_chunked(&mut reader)?
    } else if let Some(len) = content_length {
        if len > MAX_RESPONSE_BYTES {
            return Err(too_large());
        }
        let mut body = Vec::with_capacity(len);
        reader.by_ref().take(len as u64).read_to_end(&mut body)?;
        if body.len() != len {
            return Err(SubmissionError::MalformedResponse(format!(
                "body truncated at {} of {len} bytes",
                body.len()
            )));
        }
        body
    } else {
        let mut body = Vec::new();
        reader
            .take(MAX_RESPONSE_BYTES as u64 + 1)
            .read_to_end(&mut body)?;
        if body.len() > MAX_RESPONSE_BYTES {
            return Err(too_large());
        }
        body
    };

    Ok((status, body))
}

fn parse_status_line(line: &str) -> SubmissionResult<u16> {
    let mut parts = line.split_whitespace();
    let version = parts.next().unwrap_or_default();
    if !version.starts_with("HTTP/") {
        return Err(SubmissionError::MalformedResponse(format!(
            "bad status line: {line}"
        )));
    }
    parts
        .next()
        .and_then(|code| code.parse::<u16>().ok())
        .ok_or_else(|| SubmissionError::MalformedResponse(format!("bad status line: {line}")))
}

fn read_chunked<R: BufRead>(reader: &mut R) -> SubmissionResult<Vec<u8>> {
    let mut body = Vec::new();
    loop {
        let line = read_line(reader)?;
        let size_str = line.split(';').next().unwrap_or_default().trim();
        let size = usize::from_str_radix(size_str, 16)
            .map_err(|_| SubmissionError::MalformedResponse(format!("bad chunk size: {line}")))?;

        if size == 0 {
            // Trailers until the blank line
            while !read_line(reader)?.is_empty() {}
            return Ok(body);
        }

        let start = body.len();
        let end = start
            .checked_add(size)
            .filter(|&end| end <= MAX_RESPONSE_BYTES)
            .ok_or_else(too_large)?;
        reader.by_ref().take(size as u64).read_to_end(&mut body)?;
        if body.len() != end {
            return Err(SubmissionError::MalformedResponse(
                "chunk truncated".to_string(),
            ));
        }
        read_line(reader)?;
    }
}

fn too_large() -> SubmissionError {
    SubmissionError::MalformedResponse(format!(
        "response body exceeds {MAX_RESPONSE_BYTES} bytes"
    ))
}

/// One CRLF (or LF) terminated line without its terminator.
fn read_line<R: BufRead>(reader: &mut R) -> SubmissionResult<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(SubmissionError::MalformedResponse(
            "unexpected end of response".to_string(),
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
