/// A track in the built-in demo playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
    pub album: &'static str,
    /// Shown as text only, never fetched
    pub artwork_url: &'static str,
}

/// The fixed demo playlist, in play order
pub const DEMO_TRACKS: [Track; 3] = [
    Track {
        title: "Song One",
        artist: "Artist A",
        album: "Album X",
        artwork_url: "https://upload.wikimedia.org/wikipedia/en/9/97/The_Slim_Shady_LP.png",
    },
    Track {
        title: "Song Two",
        artist: "Artist B",
        album: "Album Y",
        artwork_url: "https://upload.wikimedia.org/wikipedia/en/4/4b/RedHotChiliPeppersByTheWayAlbumCover.jpg",
    },
    Track {
        title: "Song Three",
        artist: "Artist C",
        album: "Album Z",
        artwork_url: "https://upload.wikimedia.org/wikipedia/en/f/fd/Taylor_Swift_-_1989.png",
    },
];

/// Look up a demo track by playlist position
pub fn track(index: usize) -> Option<&'static Track> {
    DEMO_TRACKS.get(index)
}

/// Step `index` by `delta` positions around the playlist, wrapping at both ends
pub fn wrap_track_index(index: usize, delta: isize) -> usize {
    let len = DEMO_TRACKS.len() as isize;
    (index as isize + delta).rem_euclid(len) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_order() {
        let titles: Vec<&str> = DEMO_TRACKS.iter().map(|t| t.title).collect();
        assert_eq!(titles, ["Song One", "Song Two", "Song Three"]);
        assert_eq!(track(1).map(|t| t.album), Some("Album Y"));
        assert!(track(3).is_none());
    }

    #[test]
    fn test_wrap_track_index() {
        assert_eq!(wrap_track_index(2, 1), 0);
        assert_eq!(wrap_track_index(0, -1), 2);
        assert_eq!(wrap_track_index(1, 1), 2);
        assert_eq!(wrap_track_index(1, -4), 0);
    }
}
