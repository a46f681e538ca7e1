//! Fixed keyword vocabularies used by the scorers.

use crate::types::ProposalType;

/// Keywords that indicate a potential governance proposal.
pub const PROPOSAL_KEYWORDS: &[&str] = &[
    "proposal", "propose", "governance", "vote", "voting", "decision",
    "treasury", "fund", "funding", "budget", "allocation", "grant",
    "improvement", "upgrade", "change", "modify", "update", "implement",
    "strategy", "policy", "protocol", "parameter", "framework",
];

/// Keywords that mark a sentence as important.
pub const IMPORTANCE_KEYWORDS: &[&str] = &[
    "urgent", "important", "critical", "crucial", "significant",
    "essential", "necessary", "required", "needed", "priority",
];

/// Classification buckets, in tie-breaking order.
pub const TYPE_BUCKETS: &[(ProposalType, &[&str])] = &[
    (ProposalType::Governance, &["governance", "vote", "proposal", "policy"]),
    (ProposalType::Treasury, &["treasury", "fund", "budget", "grant"]),
    (ProposalType::Technical, &["technical", "protocol", "code", "implementation"]),
    (ProposalType::Social, &["community", "social", "communication", "culture"]),
];

/// Words that open a suggested solution.
pub const SUGGESTION_CUES: &[&str] = &[
    "should", "propose", "suggest", "recommend", "could", "consider",
];

/// Group nouns that name stakeholders.
pub const STAKEHOLDER_TERMS: &[&str] = &[
    "community", "holders", "delegates", "developers", "contributors",
    "validators", "members", "users", "team", "council", "treasury",
];

/// Union of the proposal and importance vocabularies, used for sentence ranking.
pub fn salience_keywords() -> impl Iterator<Item = &'static str> {
    PROPOSAL_KEYWORDS
        .iter()
        .chain(IMPORTANCE_KEYWORDS.iter())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vocabularies_have_no_duplicates() {
        let all: Vec<&str> = salience_keywords().collect();
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
        assert_eq!(all.len(), PROPOSAL_KEYWORDS.len() + IMPORTANCE_KEYWORDS.len());
    }

    #[test]
    fn test_bucket_order() {
        let order: Vec<ProposalType> = TYPE_BUCKETS.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            order,
            vec![
                ProposalType::Governance,
                ProposalType::Treasury,
                ProposalType::Technical,
                ProposalType::Social
            ]
        );
    }
}
