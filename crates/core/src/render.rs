//! Rendering of error response bodies for diagnostics.

use serde::de::IgnoredAny;

const INDENT: &[u8] = b"    ";

/// Re-indents a JSON document with four spaces.
///
/// Only whitespace outside strings changes: numbers, escapes, key order and
/// duplicate keys are copied from `body` as they are. Empty objects and
/// arrays stay on one line. Fails when `body` is not a single JSON value.
pub fn indent_json(body: &[u8]) -> Result<String, serde_json::Error> {
    serde_json::from_slice::<IgnoredAny>(body)?;

    let mut out = Vec::with_capacity(body.len() * 2);
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut just_opened = false;

    for &byte in body {
        if in_string {
            out.push(byte);
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }

        if matches!(byte, b' ' | b'\t' | b'\n' | b'\r') {
            continue;
        }

        if just_opened {
            just_opened = false;
            if matches!(byte, b'}' | b']') {
                depth -= 1;
                out.push(byte);
                continue;
            }
            newline(&mut out, depth);
        }

        match byte {
            b'{' | b'[' => {
                out.push(byte);
                depth += 1;
                just_opened = true;
            }
            b'}' | b']' => {
                depth -= 1;
                newline(&mut out, depth);
                out.push(byte);
            }
            b',' => {
                out.push(byte);
                newline(&mut out, depth);
            }
            b':' => out.extend_from_slice(b": "),
            b'"' => {
                out.push(byte);
                in_string = true;
            }
            _ => out.push(byte),
        }
    }

    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn newline(out: &mut Vec<u8>, depth: usize) {
    out.push(b'\n');
    for _ in 0..depth {
        out.extend_from_slice(INDENT);
    }
}
