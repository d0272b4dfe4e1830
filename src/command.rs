// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::BTreeSet;

use crate::model::Model;
use crate::parser::Arguments;
use crate::parser::Prefix;
use crate::predicate::Predicate;
use crate::types::address::Address;
use crate::types::book_error::BookError;
use crate::types::deadline::Deadline;
use crate::types::edit::RecordEdit;
use crate::types::email::Email;
use crate::types::index::Index;
use crate::types::level::Level;
use crate::types::name::Name;
use crate::types::phone::Phone;
use crate::types::record::Record;
use crate::types::subject::Subject;
use crate::types::tag::Tag;

pub const ADD_USAGE: &str = "add: Adds a flashcard to the flash book.
Parameters: n/NAME l/LEVEL e/EMAIL a/ADDRESS [d/DEADLINE] [t/TAG]...
Example: add n/Alex Yeoh l/1 e/alexyeoh@example.com a/Blk 30 Geylang Street 29 t/friends";

pub const DELETE_USAGE: &str = "delete: Deletes the flashcard identified by the index number used in the displayed list.
Parameters: INDEX (must be a positive integer)
Example: delete 1";

pub const EDIT_USAGE: &str = "edit: Edits the details of the flashcard identified by the index number used in the displayed list. Existing values will be overwritten by the input values. Deadlines are changed with the deadline command.
Parameters: INDEX (must be a positive integer) [n/NAME] [l/LEVEL] [e/EMAIL] [a/ADDRESS] [t/TAG]...
Example: edit 1 l/2 e/johndoe@example.com";

pub const DEADLINE_USAGE: &str = "deadline: Sets the deadline of the flashcard identified by the index number used in the displayed list. An empty deadline removes it.
Parameters: INDEX (must be a positive integer) [d/DEADLINE]
Example: deadline 1 d/21 August 2022";

pub const FIND_USAGE: &str = "find: Finds all flashcards whose names contain any of the given keywords (case-insensitive).
Parameters: KEYWORD [MORE_KEYWORDS]...
Example: find alice bob charlie";

pub const DIFFICULTY_USAGE: &str = "difficulty: Lists all flashcards with any of the given difficulty levels.
Parameters: LEVEL [MORE_LEVELS]...
Example: difficulty 1 3";

pub const TAGGED_USAGE: &str = "tagged: Lists all flashcards carrying any of the given tags.
Parameters: TAG [MORE_TAGS]...
Example: tagged friends";

pub const SELECT_USAGE: &str = "select: Selects the flashcard identified by the index number used in the displayed list.
Parameters: INDEX (must be a positive integer)
Example: select 1";

pub const SUBJECT_ADD_USAGE: &str = "subject-add: Adds a subject to the subject book.
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [d/DEADLINE] [t/TAG]...
Example: subject-add n/Mathematics p/91234567 e/math@example.com a/Block 12, Science Wing t/math";

pub const SUBJECT_DELETE_USAGE: &str = "subject-delete: Deletes the subject identified by the index number used in the subject list.
Parameters: INDEX (must be a positive integer)
Example: subject-delete 1";

pub const HELP_USAGE: &str = "Commands: add, delete, edit, deadline, select, clear, find, difficulty, tagged, list, subject-add, subject-delete, subjects, undo, redo, history, help, exit.
Type a command without arguments to see how to use it.";

const FLASHCARD_PREFIXES: [Prefix; 6] = [
    Prefix::Name,
    Prefix::Level,
    Prefix::Email,
    Prefix::Address,
    Prefix::Deadline,
    Prefix::Tag,
];

const SUBJECT_PREFIXES: [Prefix; 6] = [
    Prefix::Name,
    Prefix::Phone,
    Prefix::Email,
    Prefix::Address,
    Prefix::Deadline,
    Prefix::Tag,
];

/// A parsed command, ready to run against a model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add(Record),
    Delete(Index),
    Edit(Index, RecordEdit),
    Deadline(Index, Deadline),
    Select(Index),
    Clear,
    Find(Predicate),
    Difficulty(Predicate),
    Tagged(Predicate),
    List,
    AddSubject(Subject),
    DeleteSubject(Index),
    Subjects,
    Undo,
    Redo,
    History,
    Help,
    Exit,
}

/// A list to show after the feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Listing {
    /// The displayed list of flashcards.
    Flashcards,
    /// The subject book.
    Subjects,
}

/// What a command reports back to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub listing: Option<Listing>,
    pub exit: bool,
}

impl CommandResult {
    fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            listing: None,
            exit: false,
        }
    }

    fn listing(feedback: impl Into<String>, listing: Listing) -> Self {
        Self {
            listing: Some(listing),
            ..Self::new(feedback)
        }
    }
}

impl Command {
    /// Builds a command from its word and the rest of the line.
    pub fn from_parts(word: &str, args: &str) -> Result<Self, BookError> {
        match word {
            "add" | "a" => parse_add(args),
            "delete" | "d" => {
                let args = Arguments::tokenize(args, &[]);
                Ok(Command::Delete(Index::parse(args.preamble(), DELETE_USAGE)?))
            }
            "edit" | "e" => parse_edit(args),
            "deadline" | "dl" => parse_deadline(args),
            "select" | "s" => {
                let args = Arguments::tokenize(args, &[]);
                Ok(Command::Select(Index::parse(args.preamble(), SELECT_USAGE)?))
            }
            "clear" | "c" => Ok(Command::Clear),
            "find" | "f" => {
                let words = keywords(args, FIND_USAGE)?;
                Ok(Command::Find(Predicate::NameKeywords(words)))
            }
            "difficulty" | "diff" => {
                let words = keywords(args, DIFFICULTY_USAGE)?;
                Ok(Command::Difficulty(Predicate::LevelKeywords(words)))
            }
            "tagged" | "tg" => {
                let words = keywords(args, TAGGED_USAGE)?;
                Ok(Command::Tagged(Predicate::Tagged(words)))
            }
            "list" | "l" => Ok(Command::List),
            "subject-add" | "sa" => parse_add_subject(args),
            "subject-delete" | "sd" => {
                let args = Arguments::tokenize(args, &[]);
                let index = Index::parse(args.preamble(), SUBJECT_DELETE_USAGE)?;
                Ok(Command::DeleteSubject(index))
            }
            "subjects" | "sl" => Ok(Command::Subjects),
            "undo" | "u" => Ok(Command::Undo),
            "redo" | "r" => Ok(Command::Redo),
            "history" | "h" => Ok(Command::History),
            "help" => Ok(Command::Help),
            "exit" | "q" => Ok(Command::Exit),
            _ => Err(BookError::UnknownCommand),
        }
    }

    /// Runs the command. `inputs` is the session's previously entered lines,
    /// oldest first.
    pub fn execute(
        self,
        model: &mut Model,
        inputs: &[String],
    ) -> Result<CommandResult, BookError> {
        match self {
            Command::Add(record) => {
                let feedback = format!("New flashcard added: {record}");
                model.add_record(record)?;
                model.commit();
                Ok(CommandResult::new(feedback))
            }
            Command::Delete(index) => {
                let record = model.record_at(index)?;
                model.delete_record(&record)?;
                model.commit();
                Ok(CommandResult::new(format!("Deleted Flashcard: {record}")))
            }
            Command::Edit(index, edit) => {
                let record = model.record_at(index)?;
                let edited = edit.apply(&record);
                if !record.is_same_record(&edited) && model.has_record(&edited) {
                    return Err(BookError::Duplicate);
                }
                let feedback = format!("Edited Flashcard: {edited}");
                model.set_record(&record, edited)?;
                model.update_filter(Predicate::All);
                model.commit();
                Ok(CommandResult::new(feedback))
            }
            Command::Deadline(index, deadline) => {
                let record = model.record_at(index)?;
                let updated = record.with_deadline(deadline);
                let feedback = if updated.deadline().is_set() {
                    format!("Set deadline of Flashcard: {updated}")
                } else {
                    format!("Removed deadline of Flashcard: {updated}")
                };
                model.set_record(&record, updated)?;
                model.update_filter(Predicate::All);
                model.commit();
                Ok(CommandResult::new(feedback))
            }
            Command::Select(index) => {
                model.select(index)?;
                Ok(CommandResult::new(format!(
                    "Selected Flashcard: {}",
                    index.one_based()
                )))
            }
            Command::Clear => {
                model.clear();
                model.commit();
                Ok(CommandResult::new("Flash book has been cleared!"))
            }
            Command::Find(predicate)
            | Command::Difficulty(predicate)
            | Command::Tagged(predicate) => {
                model.update_filter(predicate);
                log::debug!("Filtering by {:?}.", model.filter());
                let count = model.filtered().len();
                Ok(CommandResult::listing(
                    format!("{count} flashcards listed!"),
                    Listing::Flashcards,
                ))
            }
            Command::List => {
                model.update_filter(Predicate::All);
                Ok(CommandResult::listing(
                    "Listed all flashcards",
                    Listing::Flashcards,
                ))
            }
            Command::AddSubject(subject) => {
                let feedback = format!("New subject added: {subject}");
                model.add_subject(subject)?;
                model.commit();
                Ok(CommandResult::new(feedback))
            }
            Command::DeleteSubject(index) => {
                let subject = model.subject_at(index)?;
                model.delete_subject(&subject)?;
                model.commit();
                Ok(CommandResult::new(format!("Deleted Subject: {subject}")))
            }
            Command::Subjects => Ok(CommandResult::listing(
                "Listed all subjects",
                Listing::Subjects,
            )),
            Command::Undo => {
                if !model.can_undo() {
                    return Err(BookError::NoUndoableState);
                }
                model.undo()?;
                Ok(CommandResult::new("Undo success!"))
            }
            Command::Redo => {
                if !model.can_redo() {
                    return Err(BookError::NoRedoableState);
                }
                model.redo()?;
                Ok(CommandResult::new("Redo success!"))
            }
            Command::History => {
                if inputs.is_empty() {
                    return Ok(CommandResult::new("You have not yet entered any commands."));
                }
                let mut feedback =
                    String::from("Entered commands (from most recent to earliest):");
                for input in inputs.iter().rev() {
                    feedback.push('\n');
                    feedback.push_str(input);
                }
                Ok(CommandResult::new(feedback))
            }
            Command::Help => Ok(CommandResult::new(HELP_USAGE)),
            Command::Exit => Ok(CommandResult {
                exit: true,
                ..CommandResult::new("Exiting flash book as requested ...")
            }),
        }
    }
}

/// Parses and runs a command given as its word, its arguments (index and
/// field overrides), against `model`.
pub fn execute(
    model: &mut Model,
    word: &str,
    args: &str,
    inputs: &[String],
) -> Result<CommandResult, BookError> {
    Command::from_parts(word, args)?.execute(model, inputs)
}

fn parse_add(args: &str) -> Result<Command, BookError> {
    let args = Arguments::tokenize(args, &FLASHCARD_PREFIXES);
    let required = [Prefix::Name, Prefix::Level, Prefix::Email, Prefix::Address];
    if !args.preamble().is_empty() || !required.iter().all(|p| args.has(*p)) {
        return Err(BookError::InvalidFormat(ADD_USAGE));
    }
    let name = Name::new(args.value(Prefix::Name).unwrap_or_default())?;
    let level = Level::new(args.value(Prefix::Level).unwrap_or_default())?;
    let email = Email::new(args.value(Prefix::Email).unwrap_or_default())?;
    let address = Address::new(args.value(Prefix::Address).unwrap_or_default())?;
    let deadline = Deadline::new(args.value(Prefix::Deadline).unwrap_or_default())?;
    let tags = parse_tags(&args.all_values(Prefix::Tag))?;
    let record = Record::new(name, level, email, address, deadline, tags);
    Ok(Command::Add(record))
}

fn parse_add_subject(args: &str) -> Result<Command, BookError> {
    let args = Arguments::tokenize(args, &SUBJECT_PREFIXES);
    let required = [Prefix::Name, Prefix::Phone, Prefix::Email, Prefix::Address];
    if !args.preamble().is_empty() || !required.iter().all(|p| args.has(*p)) {
        return Err(BookError::InvalidFormat(SUBJECT_ADD_USAGE));
    }
    let name = Name::new(args.value(Prefix::Name).unwrap_or_default())?;
    let phone = Phone::new(args.value(Prefix::Phone).unwrap_or_default())?;
    let email = Email::new(args.value(Prefix::Email).unwrap_or_default())?;
    let address = Address::new(args.value(Prefix::Address).unwrap_or_default())?;
    let deadline = Deadline::new(args.value(Prefix::Deadline).unwrap_or_default())?;
    let tags = parse_tags(&args.all_values(Prefix::Tag))?;
    let subject = Subject::new(name, phone, email, address, deadline, tags);
    Ok(Command::AddSubject(subject))
}

fn parse_edit(args: &str) -> Result<Command, BookError> {
    let args = Arguments::tokenize(args, &FLASHCARD_PREFIXES);
    let index = Index::parse(args.preamble(), EDIT_USAGE)?;
    if args.has(Prefix::Deadline) {
        log::debug!("Ignoring deadline given to edit.");
    }
    let edit = RecordEdit {
        name: args.value(Prefix::Name).map(Name::new).transpose()?,
        level: args.value(Prefix::Level).map(Level::new).transpose()?,
        email: args.value(Prefix::Email).map(Email::new).transpose()?,
        address: args.value(Prefix::Address).map(Address::new).transpose()?,
        tags: parse_tags_for_edit(&args.all_values(Prefix::Tag))?,
    };
    if !edit.is_any_field_edited() {
        return Err(BookError::NoFieldsEdited);
    }
    Ok(Command::Edit(index, edit))
}

fn parse_deadline(args: &str) -> Result<Command, BookError> {
    let args = Arguments::tokenize(args, &[Prefix::Deadline]);
    let index = Index::parse(args.preamble(), DEADLINE_USAGE)?;
    let deadline = Deadline::new(args.value(Prefix::Deadline).unwrap_or_default())?;
    Ok(Command::Deadline(index, deadline))
}

fn parse_tags(values: &[&str]) -> Result<BTreeSet<Tag>, BookError> {
    values.iter().map(|value| Tag::new(value)).collect()
}

/// No `t/` leaves the tags alone; a single empty `t/` clears them.
fn parse_tags_for_edit(values: &[&str]) -> Result<Option<BTreeSet<Tag>>, BookError> {
    match values {
        [] => Ok(None),
        [""] => Ok(Some(BTreeSet::new())),
        _ => parse_tags(values).map(Some),
    }
}

fn keywords(args: &str, usage: &'static str) -> Result<Vec<String>, BookError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(BookError::InvalidFormat(usage));
    }
    Ok(keywords)
}
