//! Page-wide registry of embedded players.
//!
//! Every mounted card registers once and receives a [`PlayerKey`]. Starting a
//! player stops every other one, so at most one key is playing at a time.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerKey(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayToggle {
    pub now_playing: bool,
    /// Other players that were playing and have been stopped, in registration order.
    pub stopped: Vec<PlayerKey>,
}

#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    next_key: u64,
    // registration order
    players: Vec<(PlayerKey, bool)>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self) -> PlayerKey {
        let key = PlayerKey(self.next_key);
        self.next_key += 1;
        self.players.push((key, false));
        key
    }

    pub fn unregister(&mut self, key: PlayerKey) {
        self.players.retain(|(k, _)| *k != key);
    }

    pub fn is_playing(&self, key: PlayerKey) -> bool {
        self.players
            .iter()
            .any(|(k, playing)| *k == key && *playing)
    }

    pub fn playing(&self) -> Option<PlayerKey> {
        self.players
            .iter()
            .find_map(|(k, playing)| playing.then_some(*k))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Flips `key`. Turning a player on stops all others first.
    /// Unknown keys are left alone and report `now_playing == false`.
    pub fn toggle(&mut self, key: PlayerKey) -> PlayToggle {
        let Some(was_playing) = self
            .players
            .iter()
            .find_map(|(k, playing)| (*k == key).then_some(*playing))
        else {
            return PlayToggle {
                now_playing: false,
                stopped: Vec::new(),
            };
        };

        let mut stopped = Vec::new();
        for (k, playing) in self.players.iter_mut() {
            if *k == key {
                *playing = !was_playing;
            } else if !was_playing && *playing {
                *playing = false;
                stopped.push(*k);
            }
        }

        PlayToggle {
            now_playing: !was_playing,
            stopped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_one_stops_the_playing_one() {
        let mut registry = PlayerRegistry::new();
        let keys: Vec<PlayerKey> = (0..4).map(|_| registry.register()).collect();

        let res = registry.toggle(keys[1]);
        assert!(res.now_playing);
        assert!(res.stopped.is_empty());

        let res = registry.toggle(keys[3]);
        assert!(res.now_playing);
        assert_eq!(res.stopped, vec![keys[1]]);

        assert!(registry.is_playing(keys[3]));
        assert!(!registry.is_playing(keys[1]));
        assert!(!registry.is_playing(keys[0]));
        assert!(!registry.is_playing(keys[2]));
        assert_eq!(registry.playing(), Some(keys[3]));
    }

    #[test]
    fn test_stopping_leaves_others_untouched() {
        let mut registry = PlayerRegistry::new();
        let a = registry.register();
        let b = registry.register();

        registry.toggle(a);
        let res = registry.toggle(a);
        assert!(!res.now_playing);
        assert!(res.stopped.is_empty());
        assert_eq!(registry.playing(), None);
        assert!(!registry.is_playing(b));
    }

    #[test]
    fn test_at_most_one_playing() {
        let mut registry = PlayerRegistry::new();
        let keys: Vec<PlayerKey> = (0..6).map(|_| registry.register()).collect();
        for i in [0, 5, 2, 2, 4, 1, 3, 3, 0] {
            registry.toggle(keys[i]);
            let playing = keys.iter().filter(|k| registry.is_playing(**k)).count();
            assert!(playing <= 1);
        }
    }

    #[test]
    fn test_unregister() {
        let mut registry = PlayerRegistry::new();
        let a = registry.register();
        let b = registry.register();
        registry.toggle(a);
        registry.unregister(a);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.playing(), None);

        let res = registry.toggle(a);
        assert!(!res.now_playing);
        let res = registry.toggle(b);
        assert!(res.now_playing);
        assert!(res.stopped.is_empty());
    }

    #[test]
    fn test_keys_unique_after_unregister() {
        let mut registry = PlayerRegistry::new();
        let a = registry.register();
        registry.unregister(a);
        let b = registry.register();
        assert_ne!(a, b);
        assert!(!registry.is_empty());
    }
}
