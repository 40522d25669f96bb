//! Reader for semantic dependency graphs in the SDP 2015 format.
//!
//! ```text
//! #SDP 2015
//! #20001001
//! 1   Pierre      Pierre      NNP  -  +  n:x  _     _
//! 2   Vinken      _generic_   NNP  -  -  _    ARG1  _
//! 3   ,           _           ,    -  -  _    _     _
//! ...
//!
//! #20001002
//! ...
//! ```
//!
//! Each graph starts with a `#` identifier line followed by one tab-separated
//! line per token: `ID FORM LEMMA POS TOP PRED FRAME ARG1 ... ARGk`, and ends
//! at a blank line. Token `i` becomes node `i - 1`. The `k`-th token marked
//! `PRED = +` owns argument column `k`; a label other than `_` in that column
//! on token `j` is an edge from that predicate to `j`.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use log::trace;

use crate::graph::{Edge, Graph, GraphError};

const NUM_FIXED_COLUMNS: usize = 7;

#[derive(Debug)]
pub enum SdpError {
    Io(io::Error),
    Parse { line: usize, msg: String },
    Graph { id: String, source: GraphError },
}

impl From<io::Error> for SdpError {
    fn from(e: io::Error) -> Self {
        SdpError::Io(e)
    }
}

impl fmt::Display for SdpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdpError::Io(e) => write!(f, "I/O error: {}", e),
            SdpError::Parse { line, msg } => write!(f, "Parse error on line {}: {}", line, msg),
            SdpError::Graph { id, source } => write!(f, "Invalid graph {}: {}", id, source),
        }
    }
}

impl std::error::Error for SdpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SdpError::Io(e) => Some(e),
            SdpError::Parse { .. } => None,
            SdpError::Graph { source, .. } => Some(source),
        }
    }
}

struct Token {
    is_pred: bool,
    // Argument columns holding a label.
    labelled: Vec<usize>,
}

/// Streams graphs from an SDP source, one at a time and in order.
pub struct SdpReader<R> {
    lines: Lines<R>,
    line: usize,
    failed: bool,
}

impl SdpReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SdpError> {
        let file = File::open(path)?;
        Ok(SdpReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> SdpReader<R> {
    pub fn new(reader: R) -> Self {
        SdpReader {
            lines: reader.lines(),
            line: 0,
            failed: false,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, SdpError> {
        match self.lines.next() {
            Some(line) => {
                self.line += 1;
                Ok(Some(line?))
            }
            None => Ok(None),
        }
    }

    fn parse_error(&self, msg: impl Into<String>) -> SdpError {
        SdpError::Parse {
            line: self.line,
            msg: msg.into(),
        }
    }

    fn parse_token(&self, line: &str, expected_id: usize) -> Result<Token, SdpError> {
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() < NUM_FIXED_COLUMNS {
            return Err(self.parse_error(format!(
                "expected at least {} columns, found {}",
                NUM_FIXED_COLUMNS,
                columns.len()
            )));
        }
        match columns[0].parse::<usize>() {
            Ok(id) if id == expected_id => {}
            _ => {
                return Err(self.parse_error(format!(
                    "expected token id {}, found {:?}",
                    expected_id, columns[0]
                )))
            }
        }
        let is_pred = match columns[5] {
            "+" => true,
            "-" => false,
            other => return Err(self.parse_error(format!("bad PRED column {:?}", other))),
        };
        let labelled = columns[NUM_FIXED_COLUMNS..]
            .iter()
            .enumerate()
            .filter(|(_, label)| **label != "_")
            .map(|(k, _)| k)
            .collect();
        Ok(Token { is_pred, labelled })
    }

    fn read_graph(&mut self) -> Result<Option<Graph>, SdpError> {
        let id = loop {
            match self.next_line()? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) if line.starts_with("#SDP") => continue,
                Some(line) => match line.strip_prefix('#') {
                    Some(id) => break id.trim().to_string(),
                    None => return Err(self.parse_error("expected a #-prefixed graph id")),
                },
            }
        };

        let mut tokens: Vec<Token> = Vec::new();
        while let Some(line) = self.next_line()? {
            if line.trim().is_empty() {
                break;
            }
            let token = self.parse_token(&line, tokens.len() + 1)?;
            tokens.push(token);
        }

        let preds: Vec<usize> = (0..tokens.len()).filter(|&i| tokens[i].is_pred).collect();
        let mut edges: Vec<Edge> = Vec::new();
        for (target, token) in tokens.iter().enumerate() {
            for &k in token.labelled.iter() {
                match preds.get(k) {
                    Some(&source) => edges.push(Edge::new(source, target)),
                    None => {
                        return Err(self.parse_error(format!(
                            "graph {} has {} predicates but token {} uses argument column {}",
                            id,
                            preds.len(),
                            target + 1,
                            k + 1
                        )))
                    }
                }
            }
        }
        trace!("read graph {}: {} nodes, {} edges", id, tokens.len(), edges.len());

        match Graph::new(id.clone(), tokens.len(), edges) {
            Ok(graph) => Ok(Some(graph)),
            Err(source) => Err(SdpError::Graph { id, source }),
        }
    }
}

impl<R: BufRead> Iterator for SdpReader<R> {
    type Item = Result<Graph, SdpError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_graph() {
            Ok(graph) => graph.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
