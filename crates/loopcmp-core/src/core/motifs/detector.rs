use super::rules::{Affix, COMPOSITION_RULES, CompositionRule, Variant, WINDOW_RULES, WindowRule};
use crate::core::models::amino_acid::AminoAcid;
use crate::core::models::peptide::Peptide;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifHit {
    /// The rule that matched, without sub-type annotations.
    pub rule: &'static str,
    /// The rule name with any variant labels applied, e.g. "Narrow Shellman C-cap".
    pub name: String,
    pub start: usize,
    pub residues: String,
}

/// Every motif found in one peptide, ordered by rule and then by start offset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MotifReport {
    hits: Vec<MotifHit>,
}

impl MotifReport {
    pub fn hits(&self) -> &[MotifHit] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.hits.iter().map(|h| h.name.as_str())
    }

    pub fn hits_for<'a>(&'a self, rule: &'a str) -> impl Iterator<Item = &'a MotifHit> + 'a {
        self.hits.iter().filter(move |h| h.rule == rule)
    }
}

impl IntoIterator for MotifReport {
    type Item = MotifHit;
    type IntoIter = std::vec::IntoIter<MotifHit>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

pub fn find_motifs(peptide: &Peptide) -> MotifReport {
    let residues = peptide.residues();
    let mut hits = Vec::new();

    for rule in &WINDOW_RULES {
        scan_window_rule(rule, residues, &mut hits);
    }
    for rule in &COMPOSITION_RULES {
        if let Some(hit) = check_composition_rule(rule, residues) {
            hits.push(hit);
        }
    }

    trace!(peptide = %peptide, hits = hits.len(), "Motif scan finished.");
    MotifReport { hits }
}

fn scan_window_rule(rule: &WindowRule, residues: &[AminoAcid], hits: &mut Vec<MotifHit>) {
    if residues.len() < rule.width {
        return;
    }
    for start in 0..=residues.len() - rule.width {
        let window = &residues[start..start + rule.width];
        let matched = rule
            .conditions
            .iter()
            .all(|(slot, condition)| condition.holds(window, *slot));
        if !matched {
            continue;
        }

        let mut applied: Vec<&Variant> = rule
            .variants
            .iter()
            .filter(|variant| variant_holds(variant, residues, start))
            .collect();
        if applied.is_empty() {
            applied.extend(rule.fallback.as_ref());
        }

        hits.push(MotifHit {
            rule: rule.name,
            name: qualified_name(rule.name, &applied),
            start,
            residues: window.iter().map(|r| r.code()).collect(),
        });
    }
}

fn variant_holds(variant: &Variant, residues: &[AminoAcid], start: usize) -> bool {
    variant.slots.iter().all(|&(offset, codes)| {
        start
            .checked_add_signed(offset)
            .and_then(|i| residues.get(i))
            .is_some_and(|r| codes.contains(r.code()))
    })
}

fn qualified_name(rule: &str, variants: &[&Variant]) -> String {
    let mut name = String::new();
    for variant in variants.iter().filter(|v| v.affix == Affix::Prefix) {
        name.push_str(variant.label);
        name.push(' ');
    }
    name.push_str(rule);
    for variant in variants.iter().filter(|v| v.affix == Affix::Suffix) {
        name.push(' ');
        name.push_str(variant.label);
    }
    name
}

fn check_composition_rule(rule: &CompositionRule, residues: &[AminoAcid]) -> Option<MotifHit> {
    let matching: Vec<(usize, char)> = residues
        .iter()
        .enumerate()
        .map(|(i, r)| (i, r.code()))
        .filter(|(_, code)| rule.residues.contains(*code))
        .collect();
    if matching.len() < rule.min_count {
        return None;
    }
    Some(MotifHit {
        rule: rule.name,
        name: rule.name.to_string(),
        start: matching[0].0,
        residues: matching.iter().map(|(_, code)| code).collect(),
    })
}
