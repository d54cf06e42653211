//! Color Prompt - 交互式颜色查询循环
//!
//! 读入颜色名 → 查询 → 打印结果 → 询问是否继续。
//! 非法输入只打印错误，循环继续；输入结束（EOF）视为退出。

use std::io::{self, BufRead, Write};

use crate::application::queries::handlers::LookupColorGlyphHandler;
use crate::application::queries::LookupColorGlyph;
use crate::domain::glyph::GlyphLookup;

/// 一次交互会话的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptSummary {
    pub found: usize,
    pub not_found: usize,
    pub rejected: usize,
}

impl PromptSummary {
    pub fn rounds(&self) -> usize {
        self.found + self.not_found + self.rejected
    }
}

/// 交互式颜色查询
pub struct ColorPrompt<R, W> {
    input: R,
    output: W,
    handler: LookupColorGlyphHandler,
}

impl<R: BufRead, W: Write> ColorPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            handler: LookupColorGlyphHandler::new(),
        }
    }

    pub fn run(&mut self) -> io::Result<PromptSummary> {
        let mut summary = PromptSummary::default();

        loop {
            writeln!(self.output, "\nEnter a color to be displayed: ")?;
            let Some(color) = self.read_line()? else {
                break;
            };

            match self.handler.handle(LookupColorGlyph { color }) {
                Ok(response) => match response.lookup {
                    GlyphLookup::Found(glyph) => {
                        summary.found += 1;
                        writeln!(self.output, "{} -> {}", response.alias, glyph)?;
                    }
                    GlyphLookup::NotFound => {
                        summary.not_found += 1;
                        writeln!(self.output, "{} -> No emoji with this name exists", response.alias)?;
                    }
                },
                Err(e) => {
                    summary.rejected += 1;
                    tracing::warn!(error = %e, "Color lookup rejected");
                    writeln!(self.output, "Lookup failed: {}", e)?;
                }
            }

            writeln!(self.output, "\nDo you want to try another color?")?;
            if !self.confirm()? {
                writeln!(self.output, "Goodbye")?;
                break;
            }
        }

        tracing::debug!(
            found = summary.found,
            not_found = summary.not_found,
            rejected = summary.rejected,
            "Color prompt finished"
        );
        Ok(summary)
    }

    /// 反复询问直到得到 yes/no；EOF 视为 no
    fn confirm(&mut self) -> io::Result<bool> {
        loop {
            writeln!(self.output, "Yes or No?")?;
            let Some(answer) = self.read_line()? else {
                return Ok(false);
            };

            match answer.to_ascii_uppercase().as_str() {
                "YES" | "Y" | "TRUE" | "T" => return Ok(true),
                "NO" | "N" | "FALSE" | "F" => return Ok(false),
                _ => writeln!(self.output, "Invalid response, please try again")?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
