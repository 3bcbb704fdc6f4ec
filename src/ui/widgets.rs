//! Small drawing helpers shared across components

/// One frame of a bouncing-ball loading animation, `width` cells wide.
pub fn bouncing_ball(step: usize, width: usize) -> String {
    let span = width.saturating_sub(1).max(1);
    let phase = step % (2 * span);
    let pos = if phase > span { 2 * span - phase } else { phase };
    format!("[{}●{}]", " ".repeat(pos), " ".repeat(span - pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ball_stays_inside_the_track() {
        let width = 12;
        for step in 0..50 {
            let frame = bouncing_ball(step, width);
            assert_eq!(frame.chars().count(), width + 2);
            assert_eq!(frame.chars().filter(|c| *c == '●').count(), 1);
        }
    }

    #[test]
    fn ball_reverses_at_the_walls() {
        assert_eq!(bouncing_ball(0, 4), bouncing_ball(6, 4));
    }
}
