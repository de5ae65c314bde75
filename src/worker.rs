//! Background thread answering dispatched queries.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::debug;

use crate::dispatch::{QueryReply, QueryRequest, RequestTag, Transport, TransportError};
use crate::source::SuggestionSource;

#[derive(Debug)]
pub enum WorkerCommand {
	Fetch(QueryRequest),
	Shutdown,
}

/// [`Transport`] feeding requests to a worker spawned with [`spawn`].
#[derive(Debug, Clone)]
pub struct ChannelTransport {
	commands: Sender<WorkerCommand>,
	latest: Arc<AtomicU64>,
}

impl ChannelTransport {
	/// Ask the worker to stop once it has drained the requests already sent.
	pub fn shutdown(&self) {
		let _ = self.commands.send(WorkerCommand::Shutdown);
	}
}

impl Transport for ChannelTransport {
	fn send(&mut self, request: QueryRequest) -> Result<(), TransportError> {
		self.latest.store(request.tag.get(), Ordering::Release);
		self.commands
			.send(WorkerCommand::Fetch(request))
			.map_err(|_| TransportError::Disconnected)
	}
}

/// Launch the worker thread and return the transport sending to it together
/// with the channel its replies arrive on.
///
/// Requests overtaken by a newer one before the worker picks them up are
/// skipped without a reply; nothing would apply it anyway.
pub fn spawn<S>(source: S) -> (ChannelTransport, Receiver<QueryReply>)
where
	S: SuggestionSource + Send + 'static,
{
	let (command_tx, command_rx) = mpsc::channel();
	let (reply_tx, reply_rx) = mpsc::channel();
	let latest = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest);

	thread::spawn(move || worker_loop(source, command_rx, reply_tx, thread_latest));

	(
		ChannelTransport {
			commands: command_tx,
			latest,
		},
		reply_rx,
	)
}

fn worker_loop<S: SuggestionSource>(
	mut source: S,
	command_rx: Receiver<WorkerCommand>,
	reply_tx: Sender<QueryReply>,
	latest: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(&mut source, &reply_tx, &latest, command) {
			break;
		}
	}
	// Senders must see the disconnect no later than the reply channel closes.
	drop(command_rx);
}

fn handle_command<S: SuggestionSource>(
	source: &mut S,
	reply_tx: &Sender<QueryReply>,
	latest: &AtomicU64,
	command: WorkerCommand,
) -> bool {
	match command {
		WorkerCommand::Fetch(request) => {
			if request.tag < RequestTag::new(latest.load(Ordering::Acquire)) {
				debug!(tag = %request.tag, "skipping superseded query");
				return true;
			}
			let outcome = source.fetch(&request);
			reply_tx
				.send(QueryReply {
					tag: request.tag,
					outcome,
				})
				.is_ok()
		}
		WorkerCommand::Shutdown => false,
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;
	use crate::response::QueryResponse;

	fn request(tag: u64) -> QueryRequest {
		QueryRequest {
			tag: RequestTag::new(tag),
			text: "knee".to_string(),
			urls: Vec::new(),
			limit: 5,
		}
	}

	fn echo(request: &QueryRequest) -> Result<QueryResponse, TransportError> {
		Ok(QueryResponse {
			req: Some(request.tag.get()),
			..QueryResponse::default()
		})
	}

	#[test]
	fn replies_carry_the_request_tag() {
		let (mut transport, replies) = spawn(echo);
		transport.send(request(1)).expect("send");

		let reply = replies
			.recv_timeout(Duration::from_secs(5))
			.expect("reply");
		assert_eq!(reply.tag, RequestTag::new(1));
		assert_eq!(reply.outcome.expect("response").req, Some(1));
	}

	#[test]
	fn superseded_requests_are_skipped() {
		let (transport, replies) = spawn(echo);
		transport.latest.store(3, Ordering::Release);
		transport
			.commands
			.send(WorkerCommand::Fetch(request(2)))
			.expect("send");
		transport
			.commands
			.send(WorkerCommand::Fetch(request(3)))
			.expect("send");

		let reply = replies
			.recv_timeout(Duration::from_secs(5))
			.expect("reply");
		assert_eq!(reply.tag, RequestTag::new(3));
	}

	#[test]
	fn shutdown_stops_the_worker() {
		let (mut transport, replies) = spawn(echo);
		transport.shutdown();

		assert!(replies.recv_timeout(Duration::from_secs(5)).is_err());
		assert_eq!(
			transport.send(request(1)),
			Err(TransportError::Disconnected)
		);
	}
}
