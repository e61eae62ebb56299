//! Code block extraction from markdown text.
//!
//! The document is walked once with `pulldown-cmark` and every code block is
//! collected as a [`CodeBlock`]. Callers usually only want
//! [`shell_blocks`], which keeps fenced blocks tagged exactly `shell`.
//!
//! Info strings are taken from the source text of the opening fence, not from
//! the parser: CommonMark trims and unescapes them, so ```` ``` shell ```` would
//! otherwise compare equal to `shell`.

use pulldown_cmark::{CodeBlockKind as CmarkKind, Event, Parser, Tag, TagEnd};

use crate::defaults::SHELL_LANG;

/// How a code block was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeBlockKind {
    /// Delimited by backtick or tilde fences, may carry an info string
    Fenced,
    /// Indented by four spaces, never has an info string
    Indented,
}

/// A single code block found in a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub kind: CodeBlockKind,
    /// Text after the opening fence markers, untrimmed (empty for indented blocks)
    pub info: String,
    /// Raw block text, exactly as the parser produced it
    pub content: String,
}

impl CodeBlock {
    /// True if this is a fenced block whose info string is exactly `lang`.
    pub fn is_fenced_as(&self, lang: &str) -> bool {
        self.kind == CodeBlockKind::Fenced && self.info == lang
    }
}

/// Collects every code block in `markdown`, in document order.
pub fn code_blocks(markdown: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<CodeBlock> = None;

    for (event, range) in Parser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let (kind, info) = match kind {
                    CmarkKind::Fenced(parsed) => {
                        let info = raw_fence_info(&markdown[range.start..])
                            .map(str::to_string)
                            .unwrap_or_else(|| parsed.to_string());
                        (CodeBlockKind::Fenced, info)
                    }
                    CmarkKind::Indented => (CodeBlockKind::Indented, String::new()),
                };
                current = Some(CodeBlock {
                    kind,
                    info,
                    content: String::new(),
                });
            }
            Event::Text(text) => {
                if let Some(block) = current.as_mut() {
                    block.content.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
            }
            _ => {}
        }
    }

    blocks
}

/// Returns everything after the fence markers on the first line of `source`.
///
/// `None` if that line does not open with a backtick or tilde fence.
fn raw_fence_info(source: &str) -> Option<&str> {
    let line = source.lines().next()?.trim_start_matches([' ', '\t', '>']);
    let marker = line.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let info = line.trim_start_matches(marker);
    (info.len() + 3 <= line.len()).then_some(info)
}

/// Returns the trimmed content of every fenced `shell` block in `markdown`.
pub fn shell_blocks(markdown: &str) -> Vec<String> {
    code_blocks(markdown)
        .into_iter()
        .filter(|block| block.is_fenced_as(SHELL_LANG))
        .map(|block| block.content.trim().to_string())
        .collect()
}
