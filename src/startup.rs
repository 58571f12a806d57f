//! Application Startup
//!
//! Application building and server initialization.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::infrastructure::store::{MemoryCollection, MemoryStore};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: MemoryStore,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(store: MemoryStore, settings: Arc<Settings>) -> Self {
        Self { store, settings }
    }

    /// The collection holding user records.
    pub fn users(&self) -> Arc<MemoryCollection> {
        self.store.collection(&self.settings.store.users_collection)
    }

    /// The collection holding chat records.
    pub fn chats(&self) -> Arc<MemoryCollection> {
        self.store.collection(&self.settings.store.chats_collection)
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        // Open the document store for the lifetime of the process
        let store = MemoryStore::new();
        tracing::info!("Document store opened");

        let state = AppState::new(store, Arc::new(settings.clone()));

        handlers::health::init_server_start();

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        // Bind to address
        let addr = settings.server_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }
}
