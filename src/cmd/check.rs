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

use std::path::Path;

use crate::error::Fallible;
use crate::error::fail;
use crate::storage::JsonStorage;

/// Loads the data file and reports whether it is valid.
pub fn check_data(data_file: &Path) -> Fallible<()> {
    let mut storage = JsonStorage::new(data_file.to_path_buf());
    match storage.load()? {
        Some(store) => {
            if store.is_empty() {
                log::warn!("The flash book is empty.");
            }
            println!("ok: {} flashcards", store.len());
            Ok(())
        }
        None => fail("data file does not exist."),
    }
}

#[cfg(test)]
mod tests {
    use std::fs::create_dir_all;
    use std::fs::write;

    use super::check_data;
    use crate::error::Fallible;
    use crate::helper::tmp_data_file;
    use crate::helper::typical_store;
    use crate::storage::JsonStorage;

    #[test]
    fn test_non_existent_file() -> Fallible<()> {
        let (_dir, path) = tmp_data_file()?;
        assert!(check_data(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_valid_file() -> Fallible<()> {
        let (_dir, path) = tmp_data_file()?;
        JsonStorage::new(path.clone()).save(&typical_store())?;
        assert!(check_data(&path).is_ok());
        Ok(())
    }

    #[test]
    fn test_invalid_file() -> Fallible<()> {
        let (_dir, path) = tmp_data_file()?;
        create_dir_all(path.parent().unwrap())?;
        write(&path, r#"{ "flashcards": [{ "name": "*" }] }"#)?;
        assert!(check_data(&path).is_err());
        Ok(())
    }
}
