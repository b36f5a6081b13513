//! Derives styled paragraph directives from the assembled line sequence.

use crate::model::{Line, Role, StyledParagraph};

use super::classifier::{classify, LineFeatures};
use super::LayoutConfig;

/// Sentinel for "no previous block".
const NO_BLOCK: i32 = -1;

/// Running state threaded through the fold over the line sequence.
#[derive(Debug, Clone, Copy)]
struct PlannerState {
    /// Bottom edge of the previous line, 0 before the first line
    last_bottom: i32,
    /// Block id of the previous line
    last_block_id: i32,
    /// Paragraphs emitted so far
    emitted: usize,
}

impl PlannerState {
    fn initial() -> Self {
        Self {
            last_bottom: 0,
            last_block_id: NO_BLOCK,
            emitted: 0,
        }
    }
}

/// Plan styled paragraphs for an assembled line sequence.
///
/// A total function over any well-formed line sequence, including the
/// empty one. State is an explicit accumulator passed through each step,
/// so the planner stays referentially transparent.
pub fn plan(lines: &[Line], config: &LayoutConfig) -> Vec<StyledParagraph> {
    let mut paragraphs = Vec::with_capacity(lines.len());
    let mut state = PlannerState::initial();

    for line in lines {
        let (paragraph, next) = plan_line(line, state, config);
        paragraphs.push(paragraph);
        state = next;
    }

    log::debug!("planned {} paragraphs", paragraphs.len());
    paragraphs
}

/// One step of the fold: a line plus running state in, a paragraph plus
/// updated state out.
fn plan_line(
    line: &Line,
    state: PlannerState,
    config: &LayoutConfig,
) -> (StyledParagraph, PlannerState) {
    let features = LineFeatures::of(line, config);
    let role = classify(&features, config);

    let gap = if state.last_bottom > 0 {
        line.top - state.last_bottom
    } else {
        0
    };
    let raw = (gap as f32 * config.spacing_scale).round().max(0.0) as u32;
    let is_continuation = !(gap > config.paragraph_gap || line.block_id != state.last_block_id);

    let (spacing_before, spacing_after) = match role {
        // Captions ignore the gap-derived value and force a fixed
        // trailing gap.
        Role::Header => (0, config.caption_space_after),
        Role::Heading1 => (raw, config.heading1_space_after),
        Role::Heading2 => (
            raw.max(config.heading2_space_before),
            config.heading2_space_after,
        ),
        Role::Heading3 => (
            raw.max(config.heading3_space_before),
            config.heading3_space_after,
        ),
        Role::Body => {
            let starts_fresh = !is_continuation && state.emitted > 0;
            let before = if starts_fresh {
                raw.max(config.body_space_before)
            } else {
                0
            };
            (before, 0)
        }
    };

    let paragraph = StyledParagraph {
        text: line.text.clone(),
        role,
        font_size: features.font_size,
        spacing_before,
        spacing_after,
        is_continuation,
    };

    let next = PlannerState {
        last_bottom: line.bottom(),
        last_block_id: line.block_id,
        emitted: state.emitted + 1,
    };

    (paragraph, next)
}
