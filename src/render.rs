//! Plain-text rendering of a travel plan
//!
//! Groups every non-empty sequence under its section heading and prefixes
//! each message with an icon for its status. Message text is emitted as is.

use std::fmt::Write;

use serde::Serialize;

use crate::models::{AdvisoryMessage, Section, Status, TravelPlan};

impl Status {
    /// Icon shown in front of a message
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Status::Ok => "✅",
            Status::Warning => "⚠️",
            Status::Info => "ℹ️",
            Status::Error => "❌",
        }
    }
}

/// A labeled, non-empty section of a plan
#[derive(Debug, Clone, Serialize)]
pub struct RenderedSection<'a> {
    pub label: &'static str,
    pub messages: &'a [AdvisoryMessage],
}

/// Non-empty sections of `plan` in display order
#[must_use]
pub fn sections(plan: &TravelPlan) -> Vec<RenderedSection<'_>> {
    Section::ALL
        .iter()
        .map(|section| RenderedSection {
            label: section.label(),
            messages: plan.section(*section),
        })
        .filter(|rendered| !rendered.messages.is_empty())
        .collect()
}

/// Render `plan` as text, one heading per section; empty plans render as ""
#[must_use]
pub fn render_text(plan: &TravelPlan) -> String {
    let mut out = String::new();

    for (index, section) in sections(plan).iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", section.label);
        for message in section.messages {
            let _ = writeln!(out, "{} {}", message.status.icon(), message.text);
        }
    }

    out
}
