//! Interactive session state shared by the REPL and its commands.

use anyhow::Result;
use rand::rngs::ThreadRng;

use crate::category::Category;
use crate::config;
use crate::excuse::{Excuse, ValidationError, validate_request};
use crate::generator::ExcuseGenerator;
use crate::store::ExcuseStore;

/// A situation/reason pair the user asked excuses for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub situation: String,
    pub reason: String,
}

impl Request {
    /// Trimmed request, or the user-facing reason it is unusable.
    pub fn new(situation: &str, reason: &str) -> Result<Self, ValidationError> {
        validate_request(situation, reason)?;
        Ok(Self {
            situation: situation.trim().to_string(),
            reason: reason.trim().to_string(),
        })
    }
}

pub struct Session {
    pub store: ExcuseStore,
    /// Latest batch, in display order.
    pub batch: Vec<Excuse>,
    pub last_request: Option<Request>,
    /// Excuses per batch.
    pub count: usize,
    /// Forces every batch into one category when set.
    pub category: Option<Category>,
    generator: ExcuseGenerator<ThreadRng>,
}

impl Session {
    /// Start a session, picking up the persisted batch size.
    pub fn new(store: ExcuseStore) -> Self {
        let count = config::excuse_count(store.kv());
        Self {
            store,
            batch: Vec::new(),
            last_request: None,
            count,
            category: None,
            generator: ExcuseGenerator::from_thread_rng(),
        }
    }

    /// Replace the current batch with fresh excuses for `request`.
    pub fn generate(&mut self, request: Request) -> &[Excuse] {
        self.batch = match self.category {
            Some(category) => self.generator.generate_many_in(
                category,
                &request.situation,
                &request.reason,
                self.count,
            ),
            None => self
                .generator
                .generate_many(&request.situation, &request.reason, self.count),
        };
        self.last_request = Some(request);
        &self.batch
    }

    /// Save every excuse of the current batch not already in the collection,
    /// so the collection lists them in display order. Returns how many were saved.
    pub fn save_batch(&self) -> Result<usize> {
        let mut saved = 0;
        for excuse in self.batch.iter().rev() {
            if !self.store.contains(&excuse.id) {
                self.store.save(excuse)?;
                saved += 1;
            }
        }
        Ok(saved)
    }

    /// The 1-based `n`th excuse of the current batch.
    pub fn batch_entry(&self, n: usize) -> Option<&Excuse> {
        n.checked_sub(1).and_then(|i| self.batch.get(i))
    }
}
