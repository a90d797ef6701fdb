//! Map parsing functionality for converting raw board layouts into structured data.

use glam::UVec2;

use crate::constants::Tile;
use crate::error::ParseError;

/// Represents the parsed data from a raw board layout.
#[derive(Debug)]
pub struct ParsedMap {
    /// The parsed tiles, row-major.
    pub tiles: Vec<Tile>,
    /// Board size in tiles (columns, rows).
    pub size: UVec2,
    /// The player's starting tile (column, row).
    pub player_start: UVec2,
}

/// Parser for converting raw board layouts into structured map data.
pub struct MapTileParser;

impl MapTileParser {
    /// Parses a single character into a map tile.
    ///
    /// Returns `None` for characters that are not part of the board alphabet.
    pub fn parse_character(c: char) -> Option<Tile> {
        match c {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Collectible),
            ' ' => Some(Tile::Open),
            'P' => Some(Tile::Open), // Player's starting position, treated as open floor
            _ => None,
        }
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty, rows differ in length, a character is
    /// unknown, or there is not exactly one `P` marking the player's start.
    pub fn parse_board(raw_board: &[&str]) -> Result<ParsedMap, ParseError> {
        let width = raw_board.first().map(|row| row.chars().count()).ok_or(ParseError::EmptyBoard)?;
        if width == 0 {
            return Err(ParseError::EmptyBoard);
        }

        let mut tiles = Vec::with_capacity(width * raw_board.len());
        let mut player_starts = Vec::new();

        for (row, line) in raw_board.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }

            for (col, character) in line.chars().enumerate() {
                let tile = Self::parse_character(character).ok_or(ParseError::UnknownCharacter { character, row, col })?;
                if character == 'P' {
                    player_starts.push(UVec2::new(col as u32, row as u32));
                }
                tiles.push(tile);
            }
        }

        let player_start = match player_starts.as_slice() {
            [start] => *start,
            _ => return Err(ParseError::InvalidPlayerStartCount(player_starts.len())),
        };

        Ok(ParsedMap {
            tiles,
            size: UVec2::new(width as u32, raw_board.len() as u32),
            player_start,
        })
    }
}
