//! Challenge listing service

use crate::handlers::challenges::response::ChallengeSummary;
use crate::models::ChallengeSet;

/// Challenge service for business logic
pub struct ChallengeService;

impl ChallengeService {
    /// List all challenges, without any flag material, in a stable order
    /// (category, then points ascending, then name)
    pub fn list_challenges(challenges: &ChallengeSet) -> Vec<ChallengeSummary> {
        let mut summaries: Vec<ChallengeSummary> = challenges
            .iter()
            .map(|c| ChallengeSummary {
                id: c.id,
                name: c.name.clone(),
                points: c.points,
                category: c.category.clone(),
            })
            .collect();

        summaries.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.points.cmp(&b.points))
                .then_with(|| a.name.cmp(&b.name))
        });
        summaries
    }
}
