use std::collections::VecDeque;
use std::path::Path;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use quicksearch::worker::{self, ChannelTransport};
use quicksearch::{
	Delivery, Dispatcher, Endpoint, QueryReply, QueryRequest, QueryResponse, ResourceFormatter,
	StaticSource, SuggestionFormatter, SuggestionList, TransportError, VocabularyFormatter,
	VocabularySource,
};
use tracing::{info, warn};

use crate::settings::{FormatterKind, ResolvedConfig};

/// Longest wait for a reply when no timer is pending.
const REPLY_TIMEOUT: Duration = Duration::from_secs(10);

type BoxedFormatter = Box<dyn SuggestionFormatter + Send>;

/// What the search box shows once the replayed typing has settled.
#[derive(Debug, Clone)]
pub(crate) struct SearchOutcome {
	/// The last input replayed.
	pub(crate) query: String,
	/// Requests dispatched while replaying.
	pub(crate) requests: u64,
	/// Replies dropped because a newer request had been sent.
	pub(crate) stale_replies: usize,
	pub(crate) suggestions: SuggestionList,
}

/// Replays inputs against a dispatcher whose queries are answered by a
/// background worker.
pub(crate) struct SearchWorkflow {
	dispatcher: Dispatcher<ChannelTransport, BoxedFormatter>,
	replies: Receiver<QueryReply>,
	inputs: Vec<String>,
	keystroke_gap: Duration,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		DispatcherFactory::build(config)
	}

	pub(crate) fn run(mut self) -> Result<SearchOutcome> {
		let outcome = self.replay();
		self.dispatcher.transport().shutdown();
		outcome
	}

	fn replay(&mut self) -> Result<SearchOutcome> {
		let start = Instant::now();
		let mut keystrokes: VecDeque<(Instant, String)> = self
			.inputs
			.iter()
			.enumerate()
			.map(|(index, text)| (start + self.keystroke_gap * index as u32, text.clone()))
			.collect();
		let query = self.inputs.last().cloned().unwrap_or_default();
		let mut stale_replies = 0;

		loop {
			let now = Instant::now();
			while let Some((at, _)) = keystrokes.front() {
				if *at > now {
					break;
				}
				if let Some((_, text)) = keystrokes.pop_front() {
					self.dispatcher.on_input_changed(&text, now);
				}
			}
			self.dispatcher.poll(now);

			if keystrokes.is_empty() && self.dispatcher.is_settled() {
				break;
			}

			let wake = keystrokes
				.front()
				.map(|(at, _)| *at)
				.into_iter()
				.chain(self.dispatcher.next_deadline())
				.min();
			let timeout = wake.map_or(REPLY_TIMEOUT, |at| at.saturating_duration_since(now));

			match self.replies.recv_timeout(timeout) {
				Ok(reply) => {
					if self.dispatcher.on_response(reply) == Delivery::Stale {
						stale_replies += 1;
					}
				}
				Err(RecvTimeoutError::Timeout) if wake.is_some() => {}
				Err(RecvTimeoutError::Timeout) => {
					bail!("no reply within {} seconds", REPLY_TIMEOUT.as_secs())
				}
				Err(RecvTimeoutError::Disconnected) => bail!("the suggestion worker stopped"),
			}
		}

		let requests = self.dispatcher.latest_tag().get();
		info!(requests, stale_replies, "search settled");
		Ok(SearchOutcome {
			query,
			requests,
			stale_replies,
			suggestions: self.dispatcher.suggestions().clone(),
		})
	}
}

/// Helper for translating resolved configuration into a running dispatcher.
struct DispatcherFactory;

impl DispatcherFactory {
	fn build(config: ResolvedConfig) -> Result<SearchWorkflow> {
		let ResolvedConfig {
			rows,
			inputs,
			keystroke_gap,
			dispatch,
			formatter,
			label_property,
			properties_to_search,
			primary_type,
			vocabularies,
			vocabulary_filters,
		} = config;

		let (formatter, endpoint, (transport, replies)): (BoxedFormatter, Endpoint, _) =
			match formatter {
				FormatterKind::Resource => {
					let searchable: Vec<String> = std::iter::once(label_property.clone())
						.chain(properties_to_search.iter().cloned())
						.collect();
					let source = load_rows(&rows)?.with_searchable(searchable);
					(
						Box::new(ResourceFormatter::new(
							label_property.clone(),
							properties_to_search.clone(),
						)) as BoxedFormatter,
						Endpoint::resource(primary_type, label_property, properties_to_search),
						worker::spawn(source),
					)
				}
				FormatterKind::Vocabulary if vocabularies.is_empty() => {
					let source = load_rows(&rows)?;
					let source = if properties_to_search.is_empty() {
						source
					} else {
						source.with_searchable(properties_to_search)
					};
					(
						Box::new(VocabularyFormatter) as BoxedFormatter,
						Endpoint::quick_search(),
						worker::spawn(source),
					)
				}
				FormatterKind::Vocabulary => {
					let source = load_vocabularies(
						&rows,
						&vocabularies,
						&vocabulary_filters,
						&properties_to_search,
					)?;
					(
						Box::new(VocabularyFormatter) as BoxedFormatter,
						Endpoint::vocabulary(vocabularies, vocabulary_filters),
						worker::spawn(source),
					)
				}
			};

		let dispatcher = Dispatcher::with_formatter(transport, formatter)
			.with_settings(dispatch)
			.with_endpoint(endpoint);

		Ok(SearchWorkflow {
			dispatcher,
			replies,
			inputs,
			keystroke_gap,
		})
	}
}

fn load_rows(path: &Path) -> Result<StaticSource> {
	let source = StaticSource::from_path(path)
		.with_context(|| format!("failed to load rows from {}", path.display()))?;
	info!(rows = source.len(), path = %path.display(), "loaded rows");
	Ok(source)
}

/// One source per configured vocabulary, taken from a file mapping vocabulary
/// names to rows. A vocabulary absent from the file answers every lookup with
/// "Not Found", like a servlet that does not exist.
fn load_vocabularies(
	path: &Path,
	vocabularies: &[String],
	filters: &[(String, Vec<String>)],
	searchable: &[String],
) -> Result<VocabularySource> {
	let mut loaded = StaticSource::by_vocabulary_from_path(path)
		.with_context(|| format!("failed to load vocabularies from {}", path.display()))?;

	let mut source = VocabularySource::new();
	for name in vocabularies {
		let Some(index) = loaded.iter().position(|(loaded_name, _)| loaded_name == name) else {
			warn!(vocabulary = %name, path = %path.display(), "vocabulary has no rows");
			source = source.with_vocabulary(name.clone(), missing_vocabulary);
			continue;
		};
		let (_, rows) = loaded.swap_remove(index);
		let categories = filters
			.iter()
			.find(|(vocabulary, _)| vocabulary == name)
			.map(|(_, categories)| categories.clone())
			.unwrap_or_default();
		info!(vocabulary = %name, rows = rows.len(), "loaded vocabulary");
		let rows = if searchable.is_empty() {
			rows
		} else {
			rows.with_searchable(searchable.iter().cloned())
		};
		source = source.with_vocabulary(name.clone(), rows.with_categories(categories));
	}
	Ok(source)
}

fn missing_vocabulary(_: &QueryRequest) -> Result<QueryResponse, TransportError> {
	Err(TransportError::http(404, "Not Found"))
}
