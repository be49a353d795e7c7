//! In-memory storage backend.
//!
//! Plain `HashMap` tables behind one mutex, keyed by auto-incrementing
//! integer ids. Nothing is persisted; restarting the process loses all
//! sessions, messages, and mood entries. The exercise catalogue is seeded
//! at construction and read-only afterwards.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use mindmate_core::error::{MindmateError, Result};
use mindmate_core::types::{
    ChatSession, Exercise, Message, MoodEntry, NewChatSession, NewMessage, NewMoodEntry,
};

use crate::seed::seed_exercises;

/// Monotonic id source. Each store owns its own sequences, so parallel
/// tests never observe each other's ids.
#[derive(Debug)]
pub struct IdSequence(AtomicI64);

impl IdSequence {
    pub fn starting_at(first: i64) -> Self {
        Self(AtomicI64::new(first))
    }

    pub fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

#[derive(Debug, Default)]
struct Tables {
    sessions: HashMap<i64, ChatSession>,
    messages: HashMap<i64, Message>,
    mood_entries: HashMap<i64, MoodEntry>,
    exercises: HashMap<i64, Exercise>,
}

/// In-memory store for all mutable MindMate state.
#[derive(Debug)]
pub struct MemStorage {
    tables: Mutex<Tables>,
    session_ids: IdSequence,
    message_ids: IdSequence,
    mood_entry_ids: IdSequence,
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStorage {
    /// Create a store with the exercise catalogue seeded.
    pub fn new() -> Self {
        let mut tables = Tables::default();
        for exercise in seed_exercises() {
            tables.exercises.insert(exercise.id, exercise);
        }
        Self {
            tables: Mutex::new(tables),
            session_ids: IdSequence::default(),
            message_ids: IdSequence::default(),
            mood_entry_ids: IdSequence::default(),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|e| MindmateError::Storage(e.to_string()))
    }

    pub fn create_session(&self, new: NewChatSession) -> Result<ChatSession> {
        let mut tables = self.lock()?;
        let session = ChatSession {
            id: self.session_ids.next(),
            user_id: None,
            title: new.title,
            created_at: Utc::now(),
        };
        tables.sessions.insert(session.id, session.clone());
        Ok(session)
    }

    pub fn session(&self, id: i64) -> Result<Option<ChatSession>> {
        Ok(self.lock()?.sessions.get(&id).cloned())
    }

    pub fn sessions(&self) -> Result<Vec<ChatSession>> {
        let tables = self.lock()?;
        let mut sessions: Vec<ChatSession> = tables.sessions.values().cloned().collect();
        sessions.sort_by_key(|s| s.id);
        Ok(sessions)
    }

    pub fn create_message(&self, new: NewMessage) -> Result<Message> {
        let mut tables = self.lock()?;
        let message = Message {
            id: self.message_ids.next(),
            session_id: new.session_id,
            content: new.content,
            role: new.role,
            sentiment_score: new.sentiment_score,
            created_at: Utc::now(),
        };
        tables.messages.insert(message.id, message.clone());
        Ok(message)
    }

    /// Messages for a session, oldest first. Id is the tie-break because
    /// two messages written in the same request share a timestamp at
    /// clock resolution.
    pub fn messages_by_session(&self, session_id: i64) -> Result<Vec<Message>> {
        let tables = self.lock()?;
        let mut messages: Vec<Message> = tables
            .messages
            .values()
            .filter(|m| m.session_id == session_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(messages)
    }

    pub fn exercises(&self) -> Result<Vec<Exercise>> {
        let tables = self.lock()?;
        let mut exercises: Vec<Exercise> = tables.exercises.values().cloned().collect();
        exercises.sort_by_key(|e| e.id);
        Ok(exercises)
    }

    pub fn exercise(&self, id: i64) -> Result<Option<Exercise>> {
        Ok(self.lock()?.exercises.get(&id).cloned())
    }

    pub fn create_mood_entry(&self, new: NewMoodEntry) -> Result<MoodEntry> {
        let mut tables = self.lock()?;
        let entry = MoodEntry {
            id: self.mood_entry_ids.next(),
            user_id: None,
            session_id: new.session_id,
            mood: new.mood,
            note: new.note,
            created_at: Utc::now(),
        };
        tables.mood_entries.insert(entry.id, entry.clone());
        Ok(entry)
    }

    pub fn mood_entries_by_session(&self, session_id: i64) -> Result<Vec<MoodEntry>> {
        let tables = self.lock()?;
        let mut entries: Vec<MoodEntry> = tables
            .mood_entries
            .values()
            .filter(|e| e.session_id == session_id)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.id);
        Ok(entries)
    }
}
