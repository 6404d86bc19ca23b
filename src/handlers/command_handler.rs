use crate::{
    config::Config,
    emitters::{export_deck, DeckEmitter, PresentationEmitter, PrintEmitter},
    error::Result,
    helpers::{check_tier, find_question_mut},
    mapper::{canonicalize, generate_slide_sequence, RandomTokens},
    models::{
        communication::{Command, Response},
        document::Document,
        question::{Question, Tier},
    },
    server_messages::PeerMap,
    store::DataStore,
};
use log::{info, warn};
use std::sync::{Arc, Mutex};

/// Everything the connections share.
#[derive(Clone)]
pub struct EditorState {
    pub peers: PeerMap,
    pub document: Arc<Mutex<Document>>,
    pub store: Arc<dyn DataStore>,
    pub config: Arc<Config>,
}

impl EditorState {
    pub fn new(config: Config, store: Arc<dyn DataStore>, document: Document) -> Self {
        Self {
            peers: PeerMap::default(),
            document: Arc::new(Mutex::new(document)),
            store,
            config: Arc::new(config),
        }
    }

    /// Opens the configured store and loads the document to edit. A store
    /// that cannot be read is an error; nothing saved yet gives the
    /// configured empty document.
    pub fn open(config: Config) -> Result<Self> {
        let store: Arc<dyn DataStore> = Arc::from(config.open_store()?);
        let document = store.load()?;
        info!("Editing {} questions", document.question_count());
        Ok(Self::new(config, store, document))
    }

    fn snapshot(&self) -> Document {
        self.document.lock().unwrap().clone()
    }
}

pub fn execute_command(command: Command, state: &EditorState, connection_id: &str) -> Response {
    let result = match command {
        Command::getDocument {} => {
            info!("Get document request from: {}", connection_id);
            Ok(Response::documentResponse {
                document: state.snapshot(),
            })
        }
        Command::setWelcome { welcome } => {
            info!("Set welcome request from: {}", connection_id);
            let mut document = state.document.lock().unwrap();
            document.welcome = welcome;
            Ok(Response::documentResponse {
                document: document.clone(),
            })
        }
        Command::setIntermission { intermission } => {
            info!("Set intermission request from: {}", connection_id);
            let mut document = state.document.lock().unwrap();
            document.intermission = intermission;
            Ok(Response::documentResponse {
                document: document.clone(),
            })
        }
        Command::replaceTier { tier, questions } => {
            info!(
                "Replace {:?} with {} questions from: {}",
                tier,
                questions.len(),
                connection_id
            );
            replace_tier(state, tier, questions)
        }
        Command::setCompleted { identifier, done } => {
            info!("Mark {} done={} from: {}", identifier, done, connection_id);
            set_completed(state, &identifier, done)
        }
        Command::saveChanges {} => {
            info!("Save request from: {}", connection_id);
            save_changes(state).map(|document| Response::savedResponse { document })
        }
        Command::generatePrint {} => {
            info!("Print export request from: {}", connection_id);
            export(state, &PrintEmitter)
        }
        Command::generatePresentation {} => {
            info!("Presentation export request from: {}", connection_id);
            export(state, &PresentationEmitter)
        }
    };

    match result {
        Ok(response) => response,
        Err(error) => {
            warn!("Command from {} failed: {}", connection_id, error);
            Response::errorResponse {
                errorText: error.to_string(),
            }
        }
    }
}

fn replace_tier(state: &EditorState, tier: Tier, questions: Vec<Question>) -> Result<Response> {
    check_tier(tier, &questions)?;
    let mut document = state.document.lock().unwrap();
    *document.questions.bucket_mut(tier) = questions;
    Ok(Response::documentResponse {
        document: document.clone(),
    })
}

fn set_completed(state: &EditorState, identifier: &str, done: bool) -> Result<Response> {
    let mut document = state.document.lock().unwrap();
    find_question_mut(&mut document, identifier)?.completed = Some(done);
    Ok(Response::documentResponse {
        document: document.clone(),
    })
}

/// Canonicalizes the current document, persists it and makes it the one
/// being edited. The document stays locked until the swap, so edits from
/// other connections wait for the save instead of being overwritten.
pub fn save_changes(state: &EditorState) -> Result<Document> {
    let mut document = state.document.lock().unwrap();
    let canonical = canonicalize(&document, &state.config.overrides, &mut RandomTokens::new());

    state.store.save(&canonical)?;
    *document = canonical.clone();
    drop(document);

    info!("Saved deck with {} questions", canonical.question_count());
    Ok(canonical)
}

fn export(state: &EditorState, emitter: &dyn DeckEmitter) -> Result<Response> {
    let canonical = save_changes(state)?;
    let slides = generate_slide_sequence(&canonical);
    let path = export_deck(emitter, &slides, &state.config.export_dir)?;

    Ok(Response::exportResponse {
        path: path.display().to_string(),
        slides: slides.len(),
    })
}
