use crate::core::models::amino_acid::AminoAcid;
use crate::core::properties::table;

/// Residues that can pack against a helix C-cap glycine.
const CAP_HYDROPHOBIC: &str = "IVKMLYFWA";
const NCAP_DONOR: &str = "STN";
const NCAP_ACCEPTOR: &str = "EQ";

/// A requirement on one window slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The residue's one-letter code is in the given set.
    OneOf(&'static str),
    /// The residue carries a charge opposite to the (charged) residue at another slot.
    OppositeChargeTo(usize),
}

impl Condition {
    pub(crate) fn holds(&self, window: &[AminoAcid], slot: usize) -> bool {
        let Some(&residue) = window.get(slot) else {
            return false;
        };
        match *self {
            Condition::OneOf(codes) => codes.contains(residue.code()),
            Condition::OppositeChargeTo(partner) => window.get(partner).is_some_and(|&other| {
                let charge = table::properties(residue).charge;
                charge != 0 && charge == -table::properties(other).charge
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affix {
    Prefix,
    Suffix,
}

/// A sub-type annotation checked on each hit of its rule.
///
/// Offsets are relative to the hit's start and may reach outside the window, e.g. `-1` for
/// the residue right before it. Slots outside the peptide fail the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub label: &'static str,
    pub affix: Affix,
    pub slots: &'static [(isize, &'static str)],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRule {
    pub name: &'static str,
    pub width: usize,
    pub conditions: &'static [(usize, Condition)],
    pub variants: &'static [Variant],
    /// Label applied when none of the variants hold.
    pub fallback: Option<Variant>,
}

/// A whole-peptide rule on how many residues of a class occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionRule {
    pub name: &'static str,
    pub residues: &'static str,
    pub min_count: usize,
}

const HYDROPHOBIC_NCAP_BOX: Variant = Variant {
    label: "with hydrophobic interactions",
    affix: Affix::Suffix,
    slots: &[(-1, "MLIFV"), (4, "MFIV")],
};

const HYDROPHOBIC_NCAP_BIG_BOX: Variant = Variant {
    label: "with hydrophobic interactions",
    affix: Affix::Suffix,
    slots: &[(-1, "MLIFV"), (5, "MFIV")],
};

const PROLINE_NCAP: Variant = Variant {
    label: "with a proline",
    affix: Affix::Suffix,
    slots: &[(1, "P")],
};

pub static WINDOW_RULES: [WindowRule; 6] = [
    WindowRule {
        name: "Box N-cap",
        width: 4,
        conditions: &[(0, Condition::OneOf(NCAP_DONOR)), (3, Condition::OneOf(NCAP_ACCEPTOR))],
        variants: &[HYDROPHOBIC_NCAP_BOX, PROLINE_NCAP],
        fallback: None,
    },
    WindowRule {
        name: "Big Box N-cap",
        width: 5,
        conditions: &[(0, Condition::OneOf(NCAP_DONOR)), (4, Condition::OneOf(NCAP_ACCEPTOR))],
        variants: &[HYDROPHOBIC_NCAP_BIG_BOX, PROLINE_NCAP],
        fallback: None,
    },
    WindowRule {
        name: "i-->i+3 Salt bridge",
        width: 4,
        conditions: &[(3, Condition::OppositeChargeTo(0))],
        variants: &[],
        fallback: None,
    },
    WindowRule {
        name: "i-->i+4 Salt bridge",
        width: 5,
        conditions: &[(4, Condition::OppositeChargeTo(0))],
        variants: &[],
        fallback: None,
    },
    WindowRule {
        name: "AlphaL C-cap",
        width: 7,
        conditions: &[
            (0, Condition::OneOf(CAP_HYDROPHOBIC)),
            (4, Condition::OneOf("G")),
            (5, Condition::OneOf("GSTNEDQ")),
            (6, Condition::OneOf(CAP_HYDROPHOBIC)),
        ],
        variants: &[],
        fallback: None,
    },
    WindowRule {
        name: "Shellman C-cap",
        width: 6,
        conditions: &[
            (0, Condition::OneOf(CAP_HYDROPHOBIC)),
            (4, Condition::OneOf("G")),
            (5, Condition::OneOf(CAP_HYDROPHOBIC)),
        ],
        variants: &[Variant {
            label: "Narrow",
            affix: Affix::Prefix,
            slots: &[(0, "LAM"), (3, "HKL"), (5, "IVK")],
        }],
        fallback: Some(Variant {
            label: "Broad",
            affix: Affix::Prefix,
            slots: &[],
        }),
    },
];

pub static COMPOSITION_RULES: [CompositionRule; 1] = [CompositionRule {
    name: "Multiple beta-branched residues",
    residues: "TVI",
    min_count: 2,
}];
