use super::MenuChoice;
use crate::error::MenuError;
use crate::store::PlaylistStore;
use std::io::{BufRead, Write};

/// Where the menu loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    MainMenu,
    AddingSongs,
    Exit,
}

/// Interactive session over a playlist store
pub struct MenuLoop<R, W> {
    store: PlaylistStore,
    input: R,
    output: W,
    state: MenuState,
    /// Input ran out; the next visit to the main menu exits
    input_closed: bool,
}

impl<R: BufRead, W: Write> MenuLoop<R, W> {
    pub fn new(store: PlaylistStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            state: MenuState::MainMenu,
            input_closed: false,
        }
    }

    /// Give back the output writer, e.g. to inspect a transcript
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the banner and run until the user exits or input ends
    pub fn run(&mut self) -> Result<(), MenuError> {
        writeln!(self.output, "\nWelcome to The Family Playlist!")?;
        writeln!(self.output, "Keep track of every favorite tune in one place.\n")?;

        while self.state != MenuState::Exit {
            self.state = self.step()?;
        }

        writeln!(self.output, "Goodbye! Keep the music playing!")?;
        self.output.flush()?;
        log::debug!("Menu loop finished");
        Ok(())
    }

    /// Handle one state and return the next one
    fn step(&mut self) -> Result<MenuState, MenuError> {
        match self.state {
            MenuState::MainMenu => self.main_menu(),
            MenuState::AddingSongs => self.add_songs(),
            MenuState::Exit => Ok(MenuState::Exit),
        }
    }

    fn main_menu(&mut self) -> Result<MenuState, MenuError> {
        if self.input_closed {
            return Ok(MenuState::Exit);
        }

        writeln!(self.output, "Choose an option:")?;
        writeln!(self.output, "  1. Add songs to the playlist")?;
        writeln!(self.output, "  2. View existing playlist")?;
        writeln!(self.output, "  3. Exit")?;

        let Some(line) = self.prompt("Enter 1, 2, or 3: ")? else {
            return Ok(MenuState::Exit);
        };

        match line.parse::<MenuChoice>() {
            Ok(MenuChoice::AddSongs) => Ok(MenuState::AddingSongs),
            Ok(MenuChoice::ViewPlaylist) => {
                self.show_playlist()?;
                Ok(MenuState::MainMenu)
            }
            Ok(MenuChoice::Exit) => Ok(MenuState::Exit),
            Err(e) => {
                log::debug!("{}", e);
                writeln!(self.output, "Invalid choice. Please enter 1, 2, or 3.\n")?;
                Ok(MenuState::MainMenu)
            }
        }
    }

    fn add_songs(&mut self) -> Result<MenuState, MenuError> {
        writeln!(
            self.output,
            "\nEnter song titles one at a time. Press Enter on an empty line when finished.\n"
        )?;

        let mut titles = Vec::new();
        while let Some(line) = self.prompt("Song title: ")? {
            let title = line.trim();
            if title.is_empty() {
                break;
            }
            titles.push(title.to_string());
        }

        if titles.is_empty() {
            writeln!(self.output, "No songs were added. Returning to the menu.\n")?;
            return Ok(MenuState::MainMenu);
        }

        let added = self.store.append_entries(&titles)?;
        writeln!(self.output, "Added {} song(s) to the playlist!\n", added)?;
        Ok(MenuState::MainMenu)
    }

    fn show_playlist(&mut self) -> Result<(), MenuError> {
        let Some(playlist) = self.store.load_existing()? else {
            writeln!(self.output, "\nNo playlist found yet. Add some songs first!\n")?;
            return Ok(());
        };

        if playlist.is_empty() {
            writeln!(self.output, "\nYour playlist file is empty. Add some songs!\n")?;
            return Ok(());
        }

        writeln!(self.output, "\nYour Family Playlist:")?;
        for line in playlist.numbered_lines() {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Print a prompt and read one line; `None` once input is exhausted
    fn prompt(&mut self, text: &str) -> Result<Option<String>, MenuError> {
        if self.input_closed {
            return Ok(None);
        }

        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log::debug!("End of input reached");
            self.input_closed = true;
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}
