//! The UAX #14 pair matrix
//!
//! Every ordered pair of classes maps to a [`PairAction`]. The table is
//! computed at compile time from the rules below, so the rule order is the
//! only place precedence is expressed.

use crate::class::LineBreakClass;
use crate::context::RunContext;
use crate::types::BreakOpportunity;

/// Action recorded in the pair matrix for `(left, right)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairAction {
    /// Break allowed directly between the pair
    Direct,
    /// Break allowed only when spaces separate the pair
    Indirect,
    /// Combining mark on the right; attaches when nothing separates it
    CombiningIndirect,
    /// Combining mark on the right after opening punctuation
    CombiningProhibited,
    /// No break, even across spaces
    Prohibited,
}

const N: usize = LineBreakClass::COUNT;

static PAIR_TABLE: [[PairAction; N]; N] = build_table();

const fn build_table() -> [[PairAction; N]; N] {
    let mut table = [[PairAction::Direct; N]; N];
    let mut i = 0;
    while i < N {
        let mut j = 0;
        while j < N {
            table[i][j] = derive(LineBreakClass::ALL[i], LineBreakClass::ALL[j]);
            j += 1;
        }
        i += 1;
    }
    table
}

/// Pair rule for two classes, ignoring spaces and sequence state.
const fn derive(left: LineBreakClass, right: LineBreakClass) -> PairAction {
    use LineBreakClass::*;
    use PairAction::*;

    let left = left.pairing();
    let right = right.pairing();

    // LB6, LB7
    if matches!(right, BK | CR | LF | NL | SP | ZW) {
        return Prohibited;
    }
    // LB4, LB5, LB8, LB18
    if matches!(left, BK | CR | LF | NL | ZW | SP) {
        return Direct;
    }
    // LB9
    if matches!(right, CM | ZWJ) {
        return if matches!(left, OP) {
            CombiningProhibited
        } else {
            CombiningIndirect
        };
    }
    // LB11
    if matches!(right, WJ) {
        return Prohibited;
    }
    // LB13 holds across spaces, so it precedes the left-side glue rules.
    if matches!(right, CL | CP | EX | IS | SY) {
        return Prohibited;
    }
    if matches!(left, WJ) {
        return Indirect;
    }
    // LB12, LB12a
    if matches!(left, GL) {
        return Indirect;
    }
    if matches!(right, GL) && !matches!(left, BA | HY) {
        return Indirect;
    }
    // LB14
    if matches!(left, OP) {
        return Prohibited;
    }
    // LB15, LB16, LB17
    if matches!((left, right), (QU, OP) | (CL | CP, NS) | (B2, B2)) {
        return Prohibited;
    }
    // LB19
    if matches!(left, QU) || matches!(right, QU) {
        return Indirect;
    }
    // LB20
    if matches!(left, CB) || matches!(right, CB) {
        return Direct;
    }
    // LB21, LB21b, LB22
    if matches!(right, BA | HY | NS | IN) || matches!(left, BB) || matches!((left, right), (SY, HL)) {
        return Indirect;
    }
    if matches!(
        (left, right),
        // LB23, LB23a
        (AL | HL, NU)
            | (NU, AL | HL)
            | (PR, ID | EB | EM)
            | (ID | EB | EM, PO)
            // LB24
            | (PR | PO, AL | HL)
            | (AL | HL, PR | PO)
            // LB25
            | (CL | CP | NU, PO | PR)
            | (PO | PR, OP | NU)
            | (HY | IS | NU | SY, NU)
            // LB26
            | (JL, JL | JV | H2 | H3)
            | (JV | H2, JV | JT)
            | (JT | H3, JT)
            // LB27
            | (JL | JV | JT | H2 | H3, PO)
            | (PR, JL | JV | JT | H2 | H3)
            // LB28, LB29
            | (AL | HL, AL | HL)
            | (IS, AL | HL)
            // LB30
            | (AL | HL | NU, OP)
            | (CP, AL | HL | NU)
            // LB30a, LB30b
            | (RI, RI)
            | (EB, EM)
    ) {
        return Indirect;
    }
    // LB31
    Direct
}

/// Process-wide, read-only view of the pair table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakPairMatrix;

impl BreakPairMatrix {
    /// The matrix
    pub const fn new() -> Self {
        BreakPairMatrix
    }

    /// Raw table entry for `(left, right)`.
    #[inline]
    pub fn action(&self, left: LineBreakClass, right: LineBreakClass) -> PairAction {
        PAIR_TABLE[left as usize][right as usize]
    }

    /// Context-free rule for a pair, before spaces are taken into account.
    pub fn base_rule(&self, left: LineBreakClass, right: LineBreakClass) -> BreakOpportunity {
        use LineBreakClass::*;
        match (left, right) {
            (CR, LF) => BreakOpportunity::Prohibited,
            (BK | CR | LF | NL, _) => BreakOpportunity::Mandatory,
            _ => match self.action(left, right) {
                PairAction::Direct => BreakOpportunity::Allowed,
                PairAction::Indirect | PairAction::CombiningIndirect => BreakOpportunity::Indirect,
                PairAction::Prohibited | PairAction::CombiningProhibited => {
                    BreakOpportunity::Prohibited
                }
            },
        }
    }

    /// Opportunity between `left` (the last non-space class) and `right`.
    ///
    /// `ctx` supplies what the table alone cannot see: the raw class right
    /// before `right`, the number of spaces in between, the regional
    /// indicator parity, the Hebrew-hyphen state and the East Asian width of
    /// both sides. The result is never
    /// [`BreakOpportunity::Indirect`].
    pub fn opportunity_between(
        &self,
        left: LineBreakClass,
        right: LineBreakClass,
        ctx: &RunContext,
    ) -> BreakOpportunity {
        use LineBreakClass::*;

        match ctx.prev() {
            Some(BK | LF | NL) => return BreakOpportunity::Mandatory,
            Some(CR) if right == LF => return BreakOpportunity::Prohibited,
            Some(CR) => return BreakOpportunity::Mandatory,
            // LB8a
            Some(ZWJ) if !matches!(right, BK | CR | LF | NL | SP | ZW) => {
                return BreakOpportunity::Prohibited
            }
            _ => {}
        }
        let spaced = ctx.spaces() > 0;
        // LB21a
        if ctx.hebrew_hyphen() && !spaced && !matches!(right, BK | CR | LF | NL | SP | ZW) {
            return BreakOpportunity::Prohibited;
        }
        // LB30a
        if left == RI && right == RI && !spaced {
            return if ctx.ri_count() % 2 == 1 {
                BreakOpportunity::Prohibited
            } else {
                BreakOpportunity::Allowed
            };
        }
        if !spaced {
            // LB30b
            if right == EM && ctx.base_pictographic() {
                return BreakOpportunity::Prohibited;
            }
            // LB30 does not hold East Asian brackets to adjacent words.
            let wide_opening = matches!((left, right), (AL | HL | NU, OP)) && ctx.next_wide();
            let wide_closing = matches!((left, right), (CP, AL | HL | NU)) && ctx.base_wide();
            if wide_opening || wide_closing {
                return BreakOpportunity::Allowed;
            }
        }
        match self.action(left, right) {
            PairAction::Direct => BreakOpportunity::Allowed,
            PairAction::Indirect | PairAction::CombiningIndirect if spaced => {
                BreakOpportunity::Allowed
            }
            _ => BreakOpportunity::Prohibited,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LineBreakClass::*;

    #[test]
    fn test_selected_entries() {
        let m = BreakPairMatrix::new();
        assert_eq!(m.action(AL, AL), PairAction::Indirect);
        assert_eq!(m.action(ID, ID), PairAction::Direct);
        assert_eq!(m.action(OP, AL), PairAction::Prohibited);
        assert_eq!(m.action(AL, CL), PairAction::Prohibited);
        assert_eq!(m.action(AL, CM), PairAction::CombiningIndirect);
        assert_eq!(m.action(OP, CM), PairAction::CombiningProhibited);
        assert_eq!(m.action(ZW, AL), PairAction::Direct);
        assert_eq!(m.action(AL, WJ), PairAction::Prohibited);
        assert_eq!(m.action(HY, GL), PairAction::Direct);
        assert_eq!(m.action(AL, GL), PairAction::Indirect);
        assert_eq!(m.action(QU, OP), PairAction::Prohibited);
        assert_eq!(m.action(CP, NS), PairAction::Prohibited);
        assert_eq!(m.action(ID, NS), PairAction::Indirect);
        assert_eq!(m.action(B2, B2), PairAction::Prohibited);
        assert_eq!(m.action(JL, H2), PairAction::Indirect);
        assert_eq!(m.action(H2, JL), PairAction::Direct);
        assert_eq!(m.action(EB, EM), PairAction::Indirect);
        assert_eq!(m.action(NU, PO), PairAction::Indirect);
    }

    #[test]
    fn test_unresolved_classes_pair_as_resolved() {
        let m = BreakPairMatrix::new();
        for class in LineBreakClass::ALL {
            assert_eq!(m.action(SA, class), m.action(AL, class));
            assert_eq!(m.action(class, XX), m.action(class, AL));
        }
    }

    #[test]
    fn test_base_rule() {
        let m = BreakPairMatrix::new();
        assert_eq!(m.base_rule(CR, LF), BreakOpportunity::Prohibited);
        assert_eq!(m.base_rule(LF, AL), BreakOpportunity::Mandatory);
        assert_eq!(m.base_rule(AL, AL), BreakOpportunity::Indirect);
        assert_eq!(m.base_rule(ID, ID), BreakOpportunity::Allowed);
        assert_eq!(m.base_rule(AL, SP), BreakOpportunity::Prohibited);
    }

    #[test]
    fn test_opportunity_with_spaces() {
        let m = BreakPairMatrix::new();
        let tight = RunContext::primed(Some(AL), 0);
        let spaced = RunContext::primed(Some(SP), 2);

        assert_eq!(m.opportunity_between(AL, AL, &tight), BreakOpportunity::Prohibited);
        assert_eq!(m.opportunity_between(AL, AL, &spaced), BreakOpportunity::Allowed);
        assert_eq!(m.opportunity_between(OP, AL, &spaced), BreakOpportunity::Prohibited);
        assert_eq!(m.opportunity_between(ID, ID, &tight), BreakOpportunity::Allowed);
    }

    #[test]
    fn test_closing_punctuation_after_glue_and_spaces() {
        let m = BreakPairMatrix::new();
        for left in [GL, WJ] {
            for right in [CL, CP, EX, IS, SY] {
                assert_eq!(m.action(left, right), PairAction::Prohibited, "{left} {right}");
            }
        }
        let spaced = RunContext::primed(Some(SP), 1);
        assert_eq!(m.opportunity_between(GL, CP, &spaced), BreakOpportunity::Prohibited);
        assert_eq!(m.opportunity_between(WJ, EX, &spaced), BreakOpportunity::Prohibited);
        assert_eq!(m.opportunity_between(GL, AL, &spaced), BreakOpportunity::Allowed);
    }

    #[test]
    fn test_wide_brackets_leave_words_breakable() {
        let m = BreakPairMatrix::new();
        let narrow = RunContext::primed(Some(AL), 0);
        assert_eq!(m.opportunity_between(AL, OP, &narrow), BreakOpportunity::Prohibited);
        assert_eq!(m.opportunity_between(CP, NU, &narrow), BreakOpportunity::Prohibited);

        let wide_next = RunContext::primed(Some(AL), 0).with_widths(false, true);
        assert_eq!(m.opportunity_between(AL, OP, &wide_next), BreakOpportunity::Allowed);
        assert_eq!(m.opportunity_between(NU, OP, &wide_next), BreakOpportunity::Allowed);

        let wide_base = RunContext::primed(Some(CP), 0).with_widths(true, false);
        assert_eq!(m.opportunity_between(CP, AL, &wide_base), BreakOpportunity::Allowed);
    }

    #[test]
    fn test_opportunity_after_line_terminators() {
        let m = BreakPairMatrix::new();
        let after_cr = RunContext::primed(Some(CR), 0);
        assert_eq!(m.opportunity_between(CR, LF, &after_cr), BreakOpportunity::Prohibited);
        assert_eq!(m.opportunity_between(CR, AL, &after_cr), BreakOpportunity::Mandatory);
        let after_lf = RunContext::primed(Some(LF), 0);
        assert_eq!(m.opportunity_between(LF, AL, &after_lf), BreakOpportunity::Mandatory);
    }
}
