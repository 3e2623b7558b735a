//! Excuse generation: categorize, pick a template and an enhancer, fill in.
//!
//! [`ExcuseGenerator`] owns its random source so callers (and tests) decide
//! how selection is seeded. The free functions [`generate_excuse`] and
//! [`generate_multiple_excuses`] use the thread-local RNG.

use std::collections::HashSet;

use chrono::Utc;
use rand::RngExt;
use rand::rngs::ThreadRng;
use tracing::debug;

use crate::category::{Category, categorize};
use crate::consts::DEFAULT_EXCUSE_COUNT;
use crate::excuse::{Excuse, new_id};
use crate::templates::{ENHANCERS, enhance, fill, templates_for};

/// Produces excuses from an injected random source.
pub struct ExcuseGenerator<R> {
    rng: R,
}

impl ExcuseGenerator<ThreadRng> {
    /// A generator backed by the thread-local RNG.
    pub fn from_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: RngExt> ExcuseGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one excuse, categorizing the situation by keyword.
    pub fn generate(&mut self, situation: &str, reason: &str) -> Excuse {
        self.generate_in(categorize(situation), situation, reason)
    }

    /// Generate one excuse from a fixed category's templates.
    pub fn generate_in(&mut self, category: Category, situation: &str, reason: &str) -> Excuse {
        let text = self.compose(category, reason);
        let created_at = Utc::now();
        let id = new_id(&mut self.rng, created_at);
        debug!(%category, %id, "generated excuse");
        Excuse {
            id,
            situation: situation.to_string(),
            reason: reason.to_string(),
            text,
            created_at,
        }
    }

    /// Generate `count` excuses. Ids are unique within the batch.
    pub fn generate_many(&mut self, situation: &str, reason: &str, count: usize) -> Vec<Excuse> {
        self.generate_many_in(categorize(situation), situation, reason, count)
    }

    /// Like [`generate_many`](Self::generate_many) with a fixed category.
    pub fn generate_many_in(
        &mut self,
        category: Category,
        situation: &str,
        reason: &str,
        count: usize,
    ) -> Vec<Excuse> {
        let mut seen = HashSet::with_capacity(count);
        let mut batch = Vec::with_capacity(count);
        for _ in 0..count {
            let mut excuse = self.generate_in(category, situation, reason);
            while !seen.insert(excuse.id.clone()) {
                excuse.id = new_id(&mut self.rng, excuse.created_at);
            }
            batch.push(excuse);
        }
        batch
    }

    /// Pick a template and an enhancer and fill in `reason`.
    pub fn compose(&mut self, category: Category, reason: &str) -> String {
        let templates = templates_for(category);
        let template = templates[self.rng.random_range(0..templates.len())];
        let enhancer = ENHANCERS[self.rng.random_range(0..ENHANCERS.len())];
        fill(template, &enhance(enhancer, reason))
    }
}

/// Generate one excuse for `situation` using the thread-local RNG.
pub fn generate_excuse(situation: &str, reason: &str) -> Excuse {
    ExcuseGenerator::from_thread_rng().generate(situation, reason)
}

/// Generate `count` excuses using the thread-local RNG.
///
/// Pass [`DEFAULT_EXCUSE_COUNT`] for the usual batch of three.
pub fn generate_multiple_excuses(situation: &str, reason: &str, count: usize) -> Vec<Excuse> {
    ExcuseGenerator::from_thread_rng().generate_many(situation, reason, count)
}

/// [`generate_multiple_excuses`] with the default batch size.
pub fn generate_default_batch(situation: &str, reason: &str) -> Vec<Excuse> {
    generate_multiple_excuses(situation, reason, DEFAULT_EXCUSE_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::PLACEHOLDER;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(seed: u64) -> ExcuseGenerator<StdRng> {
        ExcuseGenerator::new(StdRng::seed_from_u64(seed))
    }

    /// True if `text` is `template` with the placeholder filled by some enhancer + `reason`.
    fn matches_some_template(category: Category, text: &str, reason: &str) -> bool {
        templates_for(category).iter().any(|template| {
            ENHANCERS
                .iter()
                .any(|enhancer| fill(template, &enhance(enhancer, reason)) == text)
        })
    }

    #[test]
    fn compose_uses_category_templates() {
        let mut generator = seeded(1);
        for category in Category::ALL {
            for _ in 0..20 {
                let text = generator.compose(category, "overslept");
                assert!(matches_some_template(category, &text, "overslept"), "{text}");
                assert!(!text.contains(PLACEHOLDER));
            }
        }
    }

    #[test]
    fn generate_keeps_inputs() {
        let excuse = seeded(2).generate("quarterly meeting", "overslept");
        assert_eq!(excuse.situation, "quarterly meeting");
        assert_eq!(excuse.reason, "overslept");
        assert!(matches_some_template(
            Category::Professional,
            &excuse.text,
            "overslept"
        ));
    }

    #[test]
    fn generate_in_ignores_keywords() {
        let excuse = seeded(3).generate_in(Category::Social, "quarterly meeting", "tired");
        assert!(matches_some_template(Category::Social, &excuse.text, "tired"));
    }

    #[test]
    fn same_seed_same_texts() {
        let a: Vec<String> = seeded(42)
            .generate_many("party", "tired", 5)
            .into_iter()
            .map(|e| e.text)
            .collect();
        let b: Vec<String> = seeded(42)
            .generate_many("party", "tired", 5)
            .into_iter()
            .map(|e| e.text)
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn batch_ids_are_unique() {
        let batch = seeded(9).generate_many("dinner", "forgot", 200);
        let ids: HashSet<_> = batch.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(seeded(0).generate_many("x", "y", 0).is_empty());
    }

    #[test]
    fn default_batch_has_three() {
        assert_eq!(generate_default_batch("meeting", "overslept").len(), 3);
    }

    #[test]
    fn selection_reaches_every_template_and_enhancer() {
        let mut generator = seeded(5);
        let texts: Vec<String> = (0..500)
            .map(|_| generator.compose(Category::Default, "r"))
            .collect();
        for template in templates_for(Category::Default) {
            let prefix = template.split(PLACEHOLDER).next().unwrap_or_default();
            assert!(texts.iter().any(|t| t.starts_with(prefix)), "{template}");
        }
        for enhancer in ENHANCERS {
            assert!(texts.iter().any(|t| t.contains(enhancer)), "{enhancer}");
        }
    }
}
