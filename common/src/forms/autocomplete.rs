//! Debounced, switch-to-latest address lookup.
//!
//! The pipeline never touches a clock or the network. The caller reports
//! input changes, arms a timer for each returned [`DebounceTicket`], reports
//! the timer firing, performs whatever [`PipelineStep::Lookup`] asks for and
//! reports the outcome with the generation it was issued under. Two counters
//! keep the result honest:
//!
//! - the debounce ticket: only the newest timer may act, so a burst of edits
//!   within the quiet period collapses to its final value;
//! - the lookup generation: only the newest lookup may publish, so a slow
//!   response for an older query can never overwrite a newer one.

use crate::config::MIN_QUERY_CHARS;
use crate::error::LookupError;
use crate::model::address::AddressCandidate;

/// Identifies one armed debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DebounceTicket(u64);

/// Identifies one issued lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LookupGeneration(u64);

/// What the caller must do once a debounce timer has fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineStep {
    /// The query is too short: publish an empty list without a lookup.
    Clear,
    /// Run a geocoding lookup for `query` and report back with `generation`.
    Lookup {
        generation: LookupGeneration,
        query: String,
    },
}

#[derive(Debug, Default)]
pub struct AutocompletePipeline {
    ticket: u64,
    generation: u64,
    pending: String,
    last_considered: Option<String>,
    suggestions: Vec<AddressCandidate>,
    visible: bool,
}

impl AutocompletePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new input value and returns the ticket for its timer.
    /// Every earlier ticket is invalidated.
    pub fn input_changed(&mut self, value: impl Into<String>) -> DebounceTicket {
        self.pending = value.into();
        self.ticket += 1;
        DebounceTicket(self.ticket)
    }

    /// Called when the timer for `ticket` fires.
    ///
    /// Returns `None` when the ticket was superseded or the settled value is
    /// the one last considered.
    pub fn debounce_elapsed(&mut self, ticket: DebounceTicket) -> Option<PipelineStep> {
        if ticket.0 != self.ticket {
            return None;
        }
        if self.last_considered.as_deref() == Some(self.pending.as_str()) {
            return None;
        }

        let query = self.pending.clone();
        self.last_considered = Some(query.clone());
        // A newer settled value supersedes any lookup still in flight, even
        // when that value is too short to look up itself.
        self.generation += 1;

        if query.chars().count() <= MIN_QUERY_CHARS {
            Some(PipelineStep::Clear)
        } else {
            Some(PipelineStep::Lookup {
                generation: LookupGeneration(self.generation),
                query,
            })
        }
    }

    /// Publishes the outcome of the lookup issued under `generation`.
    ///
    /// Stale generations are dropped and `None` is returned. A failed lookup
    /// publishes an empty list.
    pub fn lookup_resolved(
        &mut self,
        generation: LookupGeneration,
        result: Result<Vec<AddressCandidate>, LookupError>,
    ) -> Option<&[AddressCandidate]> {
        if generation.0 != self.generation {
            return None;
        }
        self.publish(result.unwrap_or_default());
        Some(&self.suggestions)
    }

    /// Publishes an empty list, as for a [`PipelineStep::Clear`].
    pub fn clear(&mut self) {
        self.publish(Vec::new());
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn suggestions(&self) -> &[AddressCandidate] {
        &self.suggestions
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn publish(&mut self, suggestions: Vec<AddressCandidate>) {
        self.visible = !suggestions.is_empty();
        self.suggestions = suggestions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: u64, name: &str) -> AddressCandidate {
        AddressCandidate {
            place_id: id,
            display_name: name.to_string(),
            name: None,
            address: None,
        }
    }

    fn lookup(step: Option<PipelineStep>) -> (LookupGeneration, String) {
        match step {
            Some(PipelineStep::Lookup { generation, query }) => (generation, query),
            other => panic!("expected a lookup, got {other:?}"),
        }
    }

    #[test]
    fn short_queries_clear_without_lookup() {
        let mut pipeline = AutocompletePipeline::new();
        for value in ["", "a", "ab", "αβ"] {
            let ticket = pipeline.input_changed(value);
            assert_eq!(pipeline.debounce_elapsed(ticket), Some(PipelineStep::Clear));
        }
    }

    #[test]
    fn burst_collapses_to_final_value() {
        let mut pipeline = AutocompletePipeline::new();
        let t1 = pipeline.input_changed("Xan");
        let t2 = pipeline.input_changed("Xanth");
        let t3 = pipeline.input_changed("Xanthippou 11");

        assert_eq!(pipeline.debounce_elapsed(t1), None);
        assert_eq!(pipeline.debounce_elapsed(t2), None);
        let (_, query) = lookup(pipeline.debounce_elapsed(t3));
        assert_eq!(query, "Xanthippou 11");
    }

    #[test]
    fn unchanged_value_is_not_looked_up_twice() {
        let mut pipeline = AutocompletePipeline::new();
        let ticket = pipeline.input_changed("Aristotelous");
        lookup(pipeline.debounce_elapsed(ticket));

        let _superseded = pipeline.input_changed("Aristotelou");
        let ticket = pipeline.input_changed("Aristotelous");
        assert_eq!(pipeline.debounce_elapsed(ticket), None);
    }

    #[test]
    fn results_replace_list_and_drive_visibility() {
        let mut pipeline = AutocompletePipeline::new();
        let ticket = pipeline.input_changed("Xanthippou");
        let (generation, _) = lookup(pipeline.debounce_elapsed(ticket));

        let published = pipeline
            .lookup_resolved(generation, Ok(vec![candidate(1, "A"), candidate(2, "B")]))
            .map(<[_]>::len);
        assert_eq!(published, Some(2));
        assert!(pipeline.is_visible());

        let ticket = pipeline.input_changed("sdhfiush347958");
        let (generation, _) = lookup(pipeline.debounce_elapsed(ticket));
        pipeline.lookup_resolved(generation, Ok(Vec::new()));
        assert!(pipeline.suggestions().is_empty());
        assert!(!pipeline.is_visible());
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut pipeline = AutocompletePipeline::new();
        let ticket = pipeline.input_changed("Xanthippou");
        let (old, _) = lookup(pipeline.debounce_elapsed(ticket));
        let ticket = pipeline.input_changed("Aristotelous");
        let (new, _) = lookup(pipeline.debounce_elapsed(ticket));

        assert!(pipeline.lookup_resolved(new, Ok(vec![candidate(2, "new")])).is_some());
        assert!(pipeline.lookup_resolved(old, Ok(vec![candidate(1, "old")])).is_none());
        assert_eq!(pipeline.suggestions()[0].display_name, "new");
    }

    #[test]
    fn short_value_supersedes_pending_lookup() {
        let mut pipeline = AutocompletePipeline::new();
        let ticket = pipeline.input_changed("Xanthippou");
        let (old, _) = lookup(pipeline.debounce_elapsed(ticket));

        let ticket = pipeline.input_changed("X");
        assert_eq!(pipeline.debounce_elapsed(ticket), Some(PipelineStep::Clear));
        pipeline.clear();

        assert!(pipeline.lookup_resolved(old, Ok(vec![candidate(1, "old")])).is_none());
        assert!(!pipeline.is_visible());
    }

    #[test]
    fn failed_lookup_means_no_suggestions() {
        let mut pipeline = AutocompletePipeline::new();
        let ticket = pipeline.input_changed("Xanthippou");
        let (generation, _) = lookup(pipeline.debounce_elapsed(ticket));
        pipeline.lookup_resolved(generation, Ok(vec![candidate(1, "A")]));

        let ticket = pipeline.input_changed("Xanthippou 1");
        let (generation, _) = lookup(pipeline.debounce_elapsed(ticket));
        let published = pipeline
            .lookup_resolved(generation, Err(LookupError::Status(503)))
            .map(<[_]>::len);
        assert_eq!(published, Some(0));
        assert!(!pipeline.is_visible());
    }
}
