// Copyright 2025 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-page HTML report of SVG frames.

use std::fmt::Write as _;

use crate::svg::escape_xml;

#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    pub(crate) caption: String,
    /// `(label, svg)` pairs shown left to right.
    pub(crate) frames: Vec<(String, String)>,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>{}</title>",
        escape_xml(title)
    );
    out.push_str(
        "<style>body{font-family:system-ui,sans-serif;margin:24px;background:#f2f2f7}\
         .frames{display:flex;flex-wrap:wrap;gap:12px}\
         figure{margin:0}figcaption{font-size:12px;color:#666}</style>\n",
    );
    let _ = writeln!(out, "</head><body><h1>{}</h1>", escape_xml(title));

    for section in sections {
        let _ = writeln!(
            out,
            "<section><h2>{}</h2><p>{}</p><div class=\"frames\">",
            escape_xml(&section.title),
            escape_xml(&section.caption)
        );
        for (label, svg) in &section.frames {
            let _ = writeln!(
                out,
                "<figure>{svg}<figcaption>{}</figcaption></figure>",
                escape_xml(label)
            );
        }
        out.push_str("</div></section>\n");
    }

    out.push_str("</body></html>\n");
    out
}
