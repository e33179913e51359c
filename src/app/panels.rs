//! Per-screen view state
//!
//! Each panel owns its lists and drafts. Composer submits append a new record
//! to the list the panel renders; nothing leaves the process.

use std::cell::Cell;
use std::collections::HashMap;

use super::browser::Browser;
use super::composer::{Composer, Draft};
use crate::models::{City, Friend, Message, Post, User};
use crate::seed;

fn next_post_id(posts: &[Post]) -> u32 {
    posts.iter().map(|p| p.id).max().unwrap_or(0) + 1
}

fn post_from_draft(id: u32, author: &User, city_id: u32, draft: &Draft) -> Post {
    let mut post = Post::new(id, author, city_id, &draft.text);
    post.tags = draft.tags();
    post
}

/// Main feed: friends strip, composer, posts (newest first)
#[derive(Debug, Clone)]
pub struct FeedPanel {
    /// Friends shown in the strip
    pub friends: Vec<Friend>,
    /// Posts, newest first
    pub posts: Vec<Post>,
    /// New post composer
    pub composer: Composer,
    /// Highlighted post
    pub selected_post: usize,
}

impl FeedPanel {
    /// Feed mounted with the mock data
    pub fn new() -> Self {
        Self {
            friends: seed::friends(),
            posts: seed::feed_posts(),
            composer: Composer::collapsible(),
            selected_post: 0,
        }
    }

    /// Move the highlight down
    pub fn select_next(&mut self) {
        if !self.posts.is_empty() {
            self.selected_post = (self.selected_post + 1).min(self.posts.len() - 1);
        }
    }

    /// Move the highlight up
    pub fn select_prev(&mut self) {
        self.selected_post = self.selected_post.saturating_sub(1);
    }

    /// Publish the draft as a post by `author`. Returns whether a post was added.
    pub fn publish(&mut self, author: &User) -> bool {
        let Some(draft) = self.composer.submit() else {
            return false;
        };
        let city_id = author.city_id.unwrap_or(1);
        let post = post_from_draft(next_post_id(&self.posts), author, city_id, &draft);
        tracing::debug!(post_id = post.id, "published feed post");
        self.posts.insert(0, post);
        self.selected_post = 0;
        true
    }
}

impl Default for FeedPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// City directory with a wall per city
#[derive(Debug, Clone)]
pub struct WallPanel {
    /// Searchable city list
    pub cities: Browser<City>,
    walls: HashMap<u32, Vec<Post>>,
    /// New post composer (with tags)
    pub composer: Composer,
    /// Highlighted post on the open wall
    pub selected_post: usize,
}

impl WallPanel {
    /// Directory mounted with the mock cities and walls
    pub fn new() -> Self {
        let cities = seed::cities();
        let walls = cities
            .iter()
            .map(|c| (c.id, seed::city_posts(c.id)))
            .collect();
        Self {
            cities: Browser::new(cities, City::name_matches),
            walls,
            composer: Composer::collapsible().with_tags(),
            selected_post: 0,
        }
    }

    /// Open the wall of the highlighted city. Returns whether a city was selected.
    pub fn open_highlighted(&mut self) -> bool {
        let previous = self.cities.selected().map(|c| c.id);
        let selected = self.cities.select_highlighted();
        if selected && previous != self.cities.selected().map(|c| c.id) {
            self.composer.cancel();
            self.selected_post = 0;
        }
        selected
    }

    /// Close the wall and go back to the empty state
    pub fn close(&mut self) {
        self.cities.deselect();
        self.composer.cancel();
        self.selected_post = 0;
    }

    /// Posts on the selected city's wall, newest first
    pub fn posts(&self) -> &[Post] {
        self.cities
            .selected()
            .and_then(|c| self.walls.get(&c.id))
            .map_or(&[][..], Vec::as_slice)
    }

    /// Move the post highlight down
    pub fn select_next(&mut self) {
        let len = self.posts().len();
        if len > 0 {
            self.selected_post = (self.selected_post + 1).min(len - 1);
        }
    }

    /// Move the post highlight up
    pub fn select_prev(&mut self) {
        self.selected_post = self.selected_post.saturating_sub(1);
    }

    /// Publish the draft on the selected city's wall.
    ///
    /// Needs a selected city and non-blank text; otherwise nothing changes.
    pub fn publish(&mut self, author: &User) -> bool {
        let Some(city_id) = self.cities.selected().map(|c| c.id) else {
            return false;
        };
        let Some(draft) = self.composer.submit() else {
            return false;
        };
        let wall = self.walls.entry(city_id).or_default();
        let post = post_from_draft(next_post_id(wall), author, city_id, &draft);
        tracing::debug!(city_id, post_id = post.id, "published wall post");
        wall.insert(0, post);
        self.selected_post = 0;
        true
    }
}

impl Default for WallPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// City chat rooms
#[derive(Debug, Clone)]
pub struct ChatPanel {
    /// Searchable city list
    pub cities: Browser<City>,
    threads: HashMap<u32, Vec<Message>>,
    /// Message input (always open)
    pub composer: Composer,
    /// Lines scrolled up from the newest message; 0 keeps the newest in view
    scroll_back: u16,
    /// Thread lines above the viewport at the last draw
    max_scroll: Cell<u16>,
}

impl ChatPanel {
    /// Chats mounted with the mock cities and threads
    pub fn new() -> Self {
        let cities = seed::cities();
        let threads = cities
            .iter()
            .map(|c| (c.id, seed::city_messages(c.id)))
            .collect();
        Self {
            cities: Browser::new(cities, City::name_matches),
            threads,
            composer: Composer::inline(),
            scroll_back: 0,
            max_scroll: Cell::new(0),
        }
    }

    /// Open the highlighted room. Returns whether a city was selected.
    pub fn open_highlighted(&mut self) -> bool {
        let selected = self.cities.select_highlighted();
        if selected {
            self.jump_to_latest();
        }
        selected
    }

    /// Leave the room
    pub fn close(&mut self) {
        self.cities.deselect();
        self.scroll_back = 0;
    }

    /// Messages of the selected room, oldest first
    pub fn thread(&self) -> &[Message] {
        self.cities
            .selected()
            .and_then(|c| self.threads.get(&c.id))
            .map_or(&[][..], Vec::as_slice)
    }

    /// Lines scrolled up from the newest message
    pub fn scroll_back(&self) -> u16 {
        self.scroll_back.min(self.max_scroll.get())
    }

    /// Record how many thread lines did not fit the viewport.
    ///
    /// Called while drawing; bounds how far [`Self::scroll_up`] can go.
    pub fn set_max_scroll(&self, overflow: u16) {
        self.max_scroll.set(overflow);
    }

    /// Scroll towards older messages, stopping at the oldest one
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_back = self.scroll_back().saturating_add(lines).min(self.max_scroll.get());
    }

    /// Scroll towards newer messages
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_back = self.scroll_back().saturating_sub(lines);
    }

    /// Bring the newest message into view
    pub fn jump_to_latest(&mut self) {
        self.scroll_back = 0;
    }

    /// Send the draft to the selected room.
    ///
    /// Needs a selected city and non-blank text; otherwise nothing changes.
    /// On success the view snaps to the newest message.
    pub fn send(&mut self, author: &User) -> bool {
        let Some(city_id) = self.cities.selected().map(|c| c.id) else {
            return false;
        };
        let Some(draft) = self.composer.submit() else {
            return false;
        };
        let thread = self.threads.entry(city_id).or_default();
        let id = thread.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        thread.push(Message::text(id, author, city_id, &draft.text));
        tracing::debug!(city_id, message_id = id, "sent chat message");
        self.jump_to_latest();
        true
    }
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Friends grid
#[derive(Debug, Clone)]
pub struct FriendsPanel {
    /// Friends shown in the grid
    pub friends: Vec<Friend>,
    /// Highlighted card
    pub selected: usize,
}

impl FriendsPanel {
    /// Cards per grid row
    pub const COLUMNS: usize = 2;

    /// Grid mounted with the mock friends
    pub fn new() -> Self {
        Self {
            friends: seed::friends(),
            selected: 0,
        }
    }

    /// Move the highlight by `delta` cards, clamped to the grid
    pub fn move_by(&mut self, delta: isize) {
        if self.friends.is_empty() {
            return;
        }
        let max = self.friends.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(max);
    }

    /// Highlighted friend
    pub fn highlighted(&self) -> Option<&Friend> {
        self.friends.get(self.selected)
    }
}

impl Default for FriendsPanel {
    fn default() -> Self {
        Self::new()
    }
}
