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
use crate::storage::to_json;

/// Prints the flash book in the data file format.
pub fn export_data(data_file: &Path) -> Fallible<()> {
    let mut storage = JsonStorage::new(data_file.to_path_buf());
    let Some(store) = storage.load()? else {
        return fail("data file does not exist.");
    };
    let json: String = to_json(&store)?;
    println!("{json}");
    Ok(())
}
