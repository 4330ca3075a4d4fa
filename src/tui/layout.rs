/// Width breakpoints for the preview layout.
///
/// Single source of truth for width thresholds, so render code never
/// compares against raw column counts.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: tab strip stacks above the panel
    Compact,
    /// 60-99 cols: side-by-side with a narrow strip
    Normal,
    /// 100+ cols: side-by-side with room for full company names
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Columns given to the vertical tab strip, or `None` when stacked
    pub fn tab_strip_width(self) -> Option<u16> {
        match self {
            Breakpoint::Compact => None,
            Breakpoint::Normal => Some(18),
            Breakpoint::Wide => Some(26),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
    }

    #[test]
    fn compact_stacks_the_tab_strip() {
        assert_eq!(Breakpoint::Compact.tab_strip_width(), None);
        assert!(Breakpoint::Wide > Breakpoint::Normal);
        assert_eq!(Breakpoint::Wide.tab_strip_width(), Some(26));
    }
}
