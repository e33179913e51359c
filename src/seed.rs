//! Mock data the screens are mounted with.
//!
//! There is no backend: every list the UI shows starts from these
//! collections. Timestamps are relative to the moment of the call.

use chrono::{Duration, Utc};
use serde::Serialize;

use crate::models::{Achievement, Catch, City, Friend, Message, Post, User};

/// Profile counters shown on the profile card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    /// Posts written
    pub posts: u32,
    /// Friends
    pub friends: u32,
    /// Trophies
    pub trophies: u32,
}

/// Everything in one serialisable bundle (used by `rybakop seed`)
#[derive(Debug, Clone, Serialize)]
pub struct SeedData {
    /// Signed-in user
    pub current_user: User,
    /// City directory
    pub cities: Vec<City>,
    /// Friends strip/grid
    pub friends: Vec<Friend>,
    /// Feed posts
    pub feed: Vec<Post>,
    /// Wall posts of the first city
    pub wall: Vec<Post>,
    /// Chat thread of the first city
    pub chat: Vec<Message>,
    /// Example catches
    pub catches: Vec<Catch>,
    /// Achievement catalogue
    pub achievements: Vec<Achievement>,
}

impl SeedData {
    /// Build the bundle
    pub fn load() -> Self {
        let cities = cities();
        let first = cities.first().map_or(1, |c| c.id);
        Self {
            current_user: current_user(),
            friends: friends(),
            feed: feed_posts(),
            wall: city_posts(first),
            chat: city_messages(first),
            catches: catches(),
            achievements: achievements(),
            cities,
        }
    }
}

/// The signed-in user
pub fn current_user() -> User {
    let mut user = User::new(1, "Юрий Рыболов").with_stats(12, 89, 980);
    user.email = "yury_fisherman@rybakop.ru".to_string();
    user.city_id = Some(1);
    user.bio = Some("Щука, судак и зимняя рыбалка".to_string());
    user
}

/// Profile handle shown under the name
pub const CURRENT_HANDLE: &str = "@yury_fisherman";

/// Counters on the profile card
pub const fn profile_stats() -> ProfileStats {
    ProfileStats {
        posts: 127,
        friends: 342,
        trophies: 89,
    }
}

/// Achievement badges on the profile
pub const BADGES: [&str; 8] = ["🏆", "🎯", "⭐", "🥇", "🎖", "👑", "💎", "🔥"];

/// The five cities with walls and chats
pub fn cities() -> Vec<City> {
    vec![
        City::new(1, "Москва", "Московская область", 55.7558, 37.6173),
        City::new(2, "Санкт-Петербург", "Ленинградская область", 59.9311, 30.3609),
        City::new(3, "Новосибирск", "Новосибирская область", 55.0084, 82.9357),
        City::new(4, "Екатеринбург", "Свердловская область", 56.8389, 60.6057),
        City::new(5, "Казань", "Республика Татарстан", 55.8304, 49.0661),
    ]
}

/// Friends with their latest status
pub fn friends() -> Vec<Friend> {
    vec![
        Friend::new(1, "Иван", "🎣", "Щука 5кг!"),
        Friend::new(2, "Петр", "🐟", "На Волге"),
        Friend::new(3, "Мария", "🌊", "Карп поймала"),
        Friend::new(4, "Алексей", "🎯", "Рыбак года"),
        Friend::new(5, "Ольга", "⚓", "На озере"),
        Friend::new(6, "Дмитрий", "🏆", "Судак 3кг"),
    ]
}

/// Posts on the main feed
pub fn feed_posts() -> Vec<Post> {
    let now = Utc::now();
    let yury = current_user();
    let anna = User::new(8, "Анна Фишер").with_stats(4, 61, 530);

    let mut pike = Post::new(
        1,
        &yury,
        1,
        "Поймал щуку на 7 кг! Вот это улов! Использовал воблер Rapala. Погода отличная, клёв был с утра.",
    );
    pike.images = vec!["https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=800".to_string()];
    pike.likes_count = 42;
    pike.comments_count = 8;
    pike.created_at = now - Duration::hours(2);
    pike.updated_at = pike.created_at;

    let mut carp = Post::new(
        2,
        &anna,
        1,
        "Сегодня на Волге! Карп на 4кг, день удался! Друзья, кто еще на реке?",
    );
    carp.images = vec!["https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=800".to_string()];
    carp.likes_count = 38;
    carp.comments_count = 12;
    carp.created_at = now - Duration::hours(5);
    carp.updated_at = carp.created_at;

    vec![pike, carp]
}

/// Wall posts of a city
pub fn city_posts(city_id: u32) -> Vec<Post> {
    let now = Utc::now();
    let ivan = User::new(2, "Иван Рыбаков").with_stats(5, 150, 720);
    let maria = User::new(3, "Мария Озерная").with_stats(1, 23, 240);

    let mut first = Post::new(
        1,
        &ivan,
        city_id,
        "Вчера на речке поймал щуку на 5 кг! Какой азарт, братцы! 🎣",
    );
    first.tags = vec!["щука".to_string(), "зимняя_рыбалка".to_string()];
    first.likes_count = 42;
    first.comments_count = 8;
    first.created_at = now - Duration::hours(2);
    first.updated_at = first.created_at;

    let mut second = Post::new(
        2,
        &maria,
        city_id,
        "Ребята, кто знает хорошие места для карпа? Подскажите новичку!",
    );
    second.tags = vec!["карп".to_string(), "помощь".to_string()];
    second.likes_count = 15;
    second.comments_count = 12;
    second.created_at = now - Duration::hours(4);
    second.updated_at = second.created_at;

    vec![first, second]
}

/// Chat thread of a city, oldest first
pub fn city_messages(city_id: u32) -> Vec<Message> {
    let now = Utc::now();
    let lines = [
        (2, "Иван", "Привет всем! Кто сегодня на рыбалку?", 60),
        (3, "Петр", "Я планирую к озеру поехать, может кто составит компанию?", 30),
        (4, "Алексей", "Вчера на Волге щуку поймал на 4 кг! 🎣", 15),
    ];

    lines
        .iter()
        .zip(1..)
        .map(|(&(user_id, name, text, minutes_ago), id)| {
            let mut msg = Message::text(id, &User::new(user_id, name), city_id, text);
            msg.created_at = now - Duration::minutes(minutes_ago);
            msg
        })
        .collect()
}

/// Example catch log
pub fn catches() -> Vec<Catch> {
    let now = Utc::now();
    vec![
        Catch {
            id: 1,
            user_id: 1,
            fish_type: "щука".to_string(),
            weight: Some(7.0),
            latitude: 55.7558,
            longitude: 37.6173,
            gear: Some("воблер Rapala".to_string()),
            weather: Some("ясно".to_string()),
            time_of_day: Some("утро".to_string()),
            images: Vec::new(),
            description: Some("Взяла у коряги".to_string()),
            created_at: now - Duration::hours(2),
        },
        Catch {
            id: 2,
            user_id: 8,
            fish_type: "карп".to_string(),
            weight: Some(4.0),
            latitude: 56.3287,
            longitude: 44.0020,
            gear: Some("фидер".to_string()),
            weather: Some("облачно".to_string()),
            time_of_day: Some("день".to_string()),
            images: Vec::new(),
            description: None,
            created_at: now - Duration::hours(5),
        },
    ]
}

/// Achievement catalogue
pub fn achievements() -> Vec<Achievement> {
    let badge = |id: u32, name: &str, icon: &str, condition_type: &str, value: u32| Achievement {
        id,
        name: name.to_string(),
        description: None,
        icon: icon.to_string(),
        condition_type: condition_type.to_string(),
        condition_value: value,
    };
    vec![
        badge(1, "Первый улов", "🎣", "total_catches", 1),
        badge(2, "Сотня", "🏆", "total_catches", 100),
        badge(3, "Ветеран", "🎖", "experience_years", 10),
        badge(4, "Знаменитость", "⭐", "rating", 1000),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_city_ids_unique() {
        let ids: HashSet<_> = cities().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_city_scoped_collections() {
        assert!(city_posts(3).iter().all(|p| p.city_id == 3));
        let thread = city_messages(5);
        assert_eq!(thread.len(), 3);
        assert!(thread.iter().all(|m| m.city_id == 5));
        assert!(thread.windows(2).all(|w| w[0].created_at < w[1].created_at));
    }

    #[test]
    fn test_seed_serialises() {
        let json = serde_json::to_value(SeedData::load()).unwrap();
        assert_eq!(json["cities"].as_array().map(Vec::len), Some(5));
        assert_eq!(json["current_user"]["username"], "Юрий Рыболов");
        assert_eq!(json["chat"][0]["message_type"], "text");
    }
}
