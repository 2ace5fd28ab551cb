//! Trip workspace store.
//!
//! Owns the user's travel collections in memory and mirrors every mutation
//! to a durable key-value backend. Mutators compute the next collection
//! value, persist it, and only then replace the in-memory copy, so memory
//! never runs ahead of storage. All mutations go through the state write
//! lock, held across the backend write; writers queue FIFO, which rules
//! out the lost-update race of snapshot-then-await designs.

mod codec;
mod error;
mod keys;
mod models;
mod validation;

pub use error::StoreError;
pub use models::*;

use std::sync::Arc;

use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::backend::StorageBackend;

/// Minutes before a pending email verification code lapses.
const VERIFICATION_TTL_MINUTES: i64 = 15;

#[derive(Default)]
struct Collections {
    user: Option<User>,
    trips: Vec<Trip>,
    expenses: Vec<Expense>,
    checklist: Vec<ChecklistItem>,
    media: Vec<MediaItem>,
    saved_places: Vec<SavedPlace>,
    journal: Vec<JournalEntry>,
    playlists: Vec<Playlist>,
    posts: Vec<Post>,
    notifications: Vec<Notification>,
    onboarding_complete: bool,
}

pub struct WorkspaceStore {
    backend: Arc<dyn StorageBackend>,
    state: RwLock<Collections>,
}

/// Read one stored value; an absent key, failed read, or unreadable value
/// all degrade to the empty state (with a log for the failure cases).
async fn load_value<T: DeserializeOwned>(
    backend: &dyn StorageBackend,
    key: &'static str,
) -> Option<T> {
    match backend.get(key).await {
        Ok(Some(text)) => match codec::decode(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key = %key, error = %e, "stored value is unreadable, starting empty");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(key = %key, error = %e, "storage read failed, starting empty");
            None
        }
    }
}

impl WorkspaceStore {
    /// Load every collection from the backend in one parallel bulk read and
    /// return a ready store. The store only exists once the load completes,
    /// so there is no window in which a caller could mutate too early.
    pub async fn initialize(backend: Arc<dyn StorageBackend>) -> Self {
        let (
            user,
            trips,
            expenses,
            checklist,
            media,
            saved_places,
            journal,
            playlists,
            posts,
            notifications,
            onboarding,
        ) = tokio::join!(
            load_value::<User>(&*backend, keys::USER),
            load_value::<Vec<Trip>>(&*backend, keys::TRIPS),
            load_value::<Vec<Expense>>(&*backend, keys::EXPENSES),
            load_value::<Vec<ChecklistItem>>(&*backend, keys::CHECKLIST),
            load_value::<Vec<MediaItem>>(&*backend, keys::MEDIA),
            load_value::<Vec<SavedPlace>>(&*backend, keys::SAVED_PLACES),
            load_value::<Vec<JournalEntry>>(&*backend, keys::JOURNAL),
            load_value::<Vec<Playlist>>(&*backend, keys::PLAYLISTS),
            load_value::<Vec<Post>>(&*backend, keys::POSTS),
            load_value::<Vec<Notification>>(&*backend, keys::NOTIFICATIONS),
            load_value::<bool>(&*backend, keys::ONBOARDING),
        );

        let state = Collections {
            user,
            trips: trips.unwrap_or_default(),
            expenses: expenses.unwrap_or_default(),
            checklist: checklist.unwrap_or_default(),
            media: media.unwrap_or_default(),
            saved_places: saved_places.unwrap_or_default(),
            journal: journal.unwrap_or_default(),
            playlists: playlists.unwrap_or_default(),
            posts: posts.unwrap_or_default(),
            notifications: notifications.unwrap_or_default(),
            onboarding_complete: onboarding.unwrap_or(false),
        };

        info!(
            trips = state.trips.len(),
            expenses = state.expenses.len(),
            has_user = state.user.is_some(),
            "workspace loaded"
        );

        Self {
            backend,
            state: RwLock::new(state),
        }
    }

    /// Encode and write one collection under its fixed key.
    async fn persist<T: Serialize>(&self, key: &'static str, value: &T) -> Result<(), StoreError> {
        let text = codec::encode(value).map_err(|e| StoreError::Encode { key, source: e })?;
        self.backend
            .set(key, &text)
            .await
            .map_err(|e| StoreError::Write { key, source: e })
    }

    // ---- user ----

    pub async fn user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    /// Create or replace the user profile.
    pub async fn save_user(&self, mut user: User) -> Result<User, StoreError> {
        if user.name.trim().is_empty() {
            return Err(StoreError::Validation("name is required".to_string()));
        }
        validation::validate_email(&user.email).map_err(StoreError::Validation)?;

        let mut state = self.state.write().await;
        user.updated_at = now();
        self.persist(keys::USER, &user).await?;
        state.user = Some(user.clone());
        Ok(user)
    }

    /// Start email verification: attach a fresh 6-digit code with a
    /// 15-minute expiry and return it for delivery. `None` when no user
    /// profile exists.
    pub async fn begin_email_verification(&self) -> Result<Option<String>, StoreError> {
        let mut state = self.state.write().await;
        let Some(mut user) = state.user.clone() else {
            return Ok(None);
        };

        let code = format!("{:06}", rand::rng().random_range(0..1_000_000u32));
        user.verification = Some(VerificationCode {
            code: code.clone(),
            expires_at: now() + chrono::Duration::minutes(VERIFICATION_TTL_MINUTES),
        });
        user.updated_at = now();

        self.persist(keys::USER, &user).await?;
        state.user = Some(user);
        Ok(Some(code))
    }

    /// Confirm the pending verification code, marking the user verified.
    pub async fn confirm_email_verification(&self, code: &str) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let Some(mut user) = state.user.clone() else {
            return Err(StoreError::VerificationMissing);
        };
        let Some(pending) = user.verification.clone() else {
            return Err(StoreError::VerificationMissing);
        };

        if now() > pending.expires_at {
            return Err(StoreError::VerificationExpired);
        }
        if pending.code != code {
            return Err(StoreError::VerificationMismatch);
        }

        user.verified = true;
        user.verification = None;
        user.updated_at = now();

        self.persist(keys::USER, &user).await?;
        state.user = Some(user);
        Ok(())
    }

    /// Clear only the user profile; trips and the other collections stay
    /// for reuse on the next login.
    pub async fn logout(&self) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        self.backend
            .remove(keys::USER)
            .await
            .map_err(|e| StoreError::Write {
                key: keys::USER,
                source: e,
            })?;
        state.user = None;
        Ok(())
    }

    // ---- trips ----

    pub async fn trips(&self) -> Vec<Trip> {
        self.state.read().await.trips.clone()
    }

    pub async fn trip(&self, id: &str) -> Option<Trip> {
        self.state
            .read()
            .await
            .trips
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    pub async fn add_trip(&self, req: CreateTripRequest) -> Result<Trip, StoreError> {
        validation::validate_title(&req.title).map_err(StoreError::Validation)?;
        validation::validate_travelers(req.travelers).map_err(StoreError::Validation)?;

        let mut state = self.state.write().await;
        let trip = Trip::new(req);
        let mut trips = state.trips.clone();
        trips.push(trip.clone());
        self.persist(keys::TRIPS, &trips).await?;
        state.trips = trips;
        Ok(trip)
    }

    pub async fn update_trip(
        &self,
        id: &str,
        req: UpdateTripRequest,
    ) -> Result<Option<Trip>, StoreError> {
        let mut state = self.state.write().await;
        let Some(pos) = state.trips.iter().position(|t| t.id == id) else {
            return Ok(None);
        };

        let mut trips = state.trips.clone();
        trips[pos].apply(req);
        self.persist(keys::TRIPS, &trips).await?;
        let updated = trips[pos].clone();
        state.trips = trips;
        Ok(Some(updated))
    }

    pub async fn delete_trip(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        if !state.trips.iter().any(|t| t.id == id) {
            return Ok(false);
        }

        let trips: Vec<Trip> = state.trips.iter().filter(|t| t.id != id).cloned().collect();
        self.persist(keys::TRIPS, &trips).await?;
        state.trips = trips;
        Ok(true)
    }

    pub async fn add_trip_location(
        &self,
        trip_id: &str,
        req: CreateLocationRequest,
    ) -> Result<Option<Location>, StoreError> {
        let mut state = self.state.write().await;
        let Some(pos) = state.trips.iter().position(|t| t.id == trip_id) else {
            return Ok(None);
        };

        let location = Location::new(req);
        let mut trips = state.trips.clone();
        trips[pos].locations.push(location.clone());
        trips[pos].updated_at = now();
        self.persist(keys::TRIPS, &trips).await?;
        state.trips = trips;
        Ok(Some(location))
    }

    // ---- expenses ----

    pub async fn expenses(&self) -> Vec<Expense> {
        self.state.read().await.expenses.clone()
    }

    pub async fn expenses_for_trip(&self, trip_id: &str) -> Vec<Expense> {
        self.state
            .read()
            .await
            .expenses
            .iter()
            .filter(|e| e.trip_id == trip_id)
            .cloned()
            .collect()
    }

    /// Record an expense and, in the same logical unit, bump the owning
    /// trip's spent total and category bucket. If the budget write fails
    /// after the expense write succeeded, the expense is kept (memory and
    /// storage agree) and `BudgetOutOfSync` names the half that landed.
    pub async fn add_expense(&self, req: CreateExpenseRequest) -> Result<Expense, StoreError> {
        validation::validate_title(&req.title).map_err(StoreError::Validation)?;
        validation::validate_amount(req.amount).map_err(StoreError::Validation)?;

        let mut state = self.state.write().await;
        let expense = Expense::new(req);
        let mut expenses = state.expenses.clone();
        expenses.push(expense.clone());
        self.persist(keys::EXPENSES, &expenses).await?;
        state.expenses = expenses;

        // An expense against an unknown trip id stays unattached; that is
        // not an error.
        if let Some(pos) = state.trips.iter().position(|t| t.id == expense.trip_id) {
            let mut trips = state.trips.clone();
            trips[pos].budget.spent += expense.amount;
            trips[pos].budget.breakdown.add(expense.category, expense.amount);
            trips[pos].updated_at = now();

            match self.persist(keys::TRIPS, &trips).await {
                Ok(()) => state.trips = trips,
                Err(e) => {
                    warn!(
                        trip_id = %expense.trip_id,
                        expense_id = %expense.id,
                        error = %e,
                        "expense recorded but budget update failed"
                    );
                    return Err(StoreError::BudgetOutOfSync {
                        expense_id: expense.id.clone(),
                        trip_id: expense.trip_id.clone(),
                        source: Box::new(e),
                    });
                }
            }
        }

        Ok(expense)
    }

    // ---- checklist ----

    pub async fn checklist(&self) -> Vec<ChecklistItem> {
        self.state.read().await.checklist.clone()
    }

    pub async fn add_checklist_item(
        &self,
        req: CreateChecklistItemRequest,
    ) -> Result<ChecklistItem, StoreError> {
        validation::validate_title(&req.title).map_err(StoreError::Validation)?;

        let mut state = self.state.write().await;
        let item = ChecklistItem::new(req);
        let mut checklist = state.checklist.clone();
        checklist.push(item.clone());
        self.persist(keys::CHECKLIST, &checklist).await?;
        state.checklist = checklist;
        Ok(item)
    }

    /// Insert several items with a single backend write. Used for the
    /// advisory-derived document and health tasks.
    pub async fn add_checklist_items(
        &self,
        reqs: Vec<CreateChecklistItemRequest>,
    ) -> Result<Vec<ChecklistItem>, StoreError> {
        if reqs.is_empty() {
            return Ok(Vec::new());
        }
        for req in &reqs {
            validation::validate_title(&req.title).map_err(StoreError::Validation)?;
        }

        let mut state = self.state.write().await;
        let items: Vec<ChecklistItem> = reqs.into_iter().map(ChecklistItem::new).collect();
        let mut checklist = state.checklist.clone();
        checklist.extend(items.iter().cloned());
        self.persist(keys::CHECKLIST, &checklist).await?;
        state.checklist = checklist;
        Ok(items)
    }

    pub async fn update_checklist_item(
        &self,
        id: &str,
        req: UpdateChecklistItemRequest,
    ) -> Result<Option<ChecklistItem>, StoreError> {
        let mut state = self.state.write().await;
        let Some(pos) = state.checklist.iter().position(|i| i.id == id) else {
            return Ok(None);
        };

        let mut checklist = state.checklist.clone();
        checklist[pos].apply(req);
        self.persist(keys::CHECKLIST, &checklist).await?;
        let updated = checklist[pos].clone();
        state.checklist = checklist;
        Ok(Some(updated))
    }

    pub async fn set_checklist_done(&self, id: &str, done: bool) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        let Some(pos) = state.checklist.iter().position(|i| i.id == id) else {
            return Ok(false);
        };

        let mut checklist = state.checklist.clone();
        checklist[pos].done = done;
        self.persist(keys::CHECKLIST, &checklist).await?;
        state.checklist = checklist;
        Ok(true)
    }

    pub async fn delete_checklist_item(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        if !state.checklist.iter().any(|i| i.id == id) {
            return Ok(false);
        }

        let checklist: Vec<ChecklistItem> = state
            .checklist
            .iter()
            .filter(|i| i.id != id)
            .cloned()
            .collect();
        self.persist(keys::CHECKLIST, &checklist).await?;
        state.checklist = checklist;
        Ok(true)
    }

    // ---- media ----

    pub async fn media(&self) -> Vec<MediaItem> {
        self.state.read().await.media.clone()
    }

    pub async fn add_media(&self, req: CreateMediaRequest) -> Result<MediaItem, StoreError> {
        let mut state = self.state.write().await;
        let item = MediaItem::new(req);
        let mut media = state.media.clone();
        media.push(item.clone());
        self.persist(keys::MEDIA, &media).await?;
        state.media = media;
        Ok(item)
    }

    // ---- saved places ----

    pub async fn saved_places(&self) -> Vec<SavedPlace> {
        self.state.read().await.saved_places.clone()
    }

    pub async fn add_saved_place(
        &self,
        req: CreateSavedPlaceRequest,
    ) -> Result<SavedPlace, StoreError> {
        let mut state = self.state.write().await;
        let place = SavedPlace::new(req);
        let mut saved_places = state.saved_places.clone();
        saved_places.push(place.clone());
        self.persist(keys::SAVED_PLACES, &saved_places).await?;
        state.saved_places = saved_places;
        Ok(place)
    }

    pub async fn delete_saved_place(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        if !state.saved_places.iter().any(|p| p.id == id) {
            return Ok(false);
        }

        let saved_places: Vec<SavedPlace> = state
            .saved_places
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        self.persist(keys::SAVED_PLACES, &saved_places).await?;
        state.saved_places = saved_places;
        Ok(true)
    }

    // ---- journal ----

    pub async fn journal(&self) -> Vec<JournalEntry> {
        self.state.read().await.journal.clone()
    }

    pub async fn add_journal_entry(
        &self,
        req: CreateJournalEntryRequest,
    ) -> Result<JournalEntry, StoreError> {
        validation::validate_title(&req.title).map_err(StoreError::Validation)?;

        let mut state = self.state.write().await;
        let entry = JournalEntry::new(req);
        let mut journal = state.journal.clone();
        journal.push(entry.clone());
        self.persist(keys::JOURNAL, &journal).await?;
        state.journal = journal;
        Ok(entry)
    }

    // ---- playlists ----

    pub async fn playlists(&self) -> Vec<Playlist> {
        self.state.read().await.playlists.clone()
    }

    pub async fn add_playlist(&self, req: CreatePlaylistRequest) -> Result<Playlist, StoreError> {
        let mut state = self.state.write().await;
        let playlist = Playlist::new(req);
        let mut playlists = state.playlists.clone();
        playlists.push(playlist.clone());
        self.persist(keys::PLAYLISTS, &playlists).await?;
        state.playlists = playlists;
        Ok(playlist)
    }

    // ---- posts ----

    pub async fn posts(&self) -> Vec<Post> {
        self.state.read().await.posts.clone()
    }

    pub async fn add_post(&self, req: CreatePostRequest) -> Result<Post, StoreError> {
        let mut state = self.state.write().await;
        let post = Post::new(req);
        let mut posts = state.posts.clone();
        posts.push(post.clone());
        self.persist(keys::POSTS, &posts).await?;
        state.posts = posts;
        Ok(post)
    }

    // ---- notifications ----

    pub async fn notifications(&self) -> Vec<Notification> {
        self.state.read().await.notifications.clone()
    }

    pub async fn add_notification(
        &self,
        req: CreateNotificationRequest,
    ) -> Result<Notification, StoreError> {
        let mut state = self.state.write().await;
        let notification = Notification::new(req);
        let mut notifications = state.notifications.clone();
        notifications.push(notification.clone());
        self.persist(keys::NOTIFICATIONS, &notifications).await?;
        state.notifications = notifications;
        Ok(notification)
    }

    pub async fn mark_notification_read(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        let Some(pos) = state.notifications.iter().position(|n| n.id == id) else {
            return Ok(false);
        };

        let mut notifications = state.notifications.clone();
        notifications[pos].read = true;
        self.persist(keys::NOTIFICATIONS, &notifications).await?;
        state.notifications = notifications;
        Ok(true)
    }

    // ---- onboarding ----

    pub async fn onboarding_complete(&self) -> bool {
        self.state.read().await.onboarding_complete
    }

    pub async fn set_onboarding_complete(&self, done: bool) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        self.persist(keys::ONBOARDING, &done).await?;
        state.onboarding_complete = done;
        Ok(())
    }

    // ---- account ----

    /// Remove every workspace key in one call and reset all in-memory
    /// collections. If the removal fails nothing is cleared locally and
    /// the error is returned for the caller to retry.
    pub async fn delete_account(&self) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        self.backend
            .remove_many(&keys::ALL)
            .await
            .map_err(|e| StoreError::Clear { source: e })?;
        *state = Collections::default();
        info!("workspace data cleared");
        Ok(())
    }
}
