//! Asynchronous filesystem natives.
//!
//! Each call validates its arguments synchronously, then performs the I/O on
//! a background task and reports the outcome to its callback. Relative paths
//! resolve against the calling program's directory.

use std::fs::{self, File, Metadata, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::UNIX_EPOCH;

use ink_eval::{invalid_argument, Composite, Context, EvalResult, Value};

use crate::{args, events};

pub(crate) fn install(ctx: &Arc<Context>) {
    ctx.define_native("read", read);
    ctx.define_native("write", write);
    ctx.define_native("delete", delete);
    ctx.define_native("stat", stat);
    ctx.define_native("dir", dir);
    ctx.define_native("make", make);
}

fn resolve(ctx: &Context, name: &str, args: &[Value]) -> Result<PathBuf, ink_eval::EvalError> {
    let path = args::string(name, args, 0)?.to_string_lossy();
    Ok(ctx.working_dir().join(path))
}

/// Run `op` on a background task and pass its event to `cb`.
fn spawn_io(ctx: &Arc<Context>, name: &str, cb: Value, op: impl FnOnce() -> Value + Send + 'static) {
    let task_ctx = Arc::clone(ctx);
    ctx.engine().spawn_task(name, move || {
        let event = op();
        task_ctx.call_back(&cb, vec![event]);
    });
}

fn byte_offset(name: &str, n: f64) -> Result<u64, ink_eval::EvalError> {
    if n < 0.0 || n.fract() != 0.0 {
        return Err(invalid_argument(name, format!("invalid offset {n}")));
    }
    Ok(n as u64)
}

/// `read(path, offset, length, cb)`: up to `length` bytes from `offset`.
fn read(ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("read", &args, 4)?;
    let path = resolve(ctx, "read", &args)?;
    let offset = byte_offset("read", args::number("read", &args, 1)?)?;
    let length = byte_offset("read", args::number("read", &args, 2)?)?;
    let cb = args::callback("read", &args, 3)?;

    spawn_io(ctx, "read", cb, move || {
        match read_range(&path, offset, length) {
            Ok(bytes) => events::data(Value::string(bytes)),
            Err(err) => events::error(format!("could not read {}: {err}", path.display())),
        }
    });
    Ok(Value::Null)
}

fn read_range(path: &Path, offset: u64, length: u64) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(offset))?;
    let mut bytes = Vec::new();
    file.take(length).read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// `write(path, offset, data, cb)`: write `data` at `offset`, or append
/// when `offset` is -1. Creates the file if needed.
fn write(ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("write", &args, 4)?;
    let path = resolve(ctx, "write", &args)?;
    let offset = args::number("write", &args, 1)?;
    let offset = if offset == -1.0 {
        None
    } else {
        Some(byte_offset("write", offset)?)
    };
    let data = args::string("write", &args, 2)?.to_vec();
    let cb = args::callback("write", &args, 3)?;

    spawn_io(ctx, "write", cb, move || {
        match write_at(&path, offset, &data) {
            Ok(()) => events::end(),
            Err(err) => events::error(format!("could not write {}: {err}", path.display())),
        }
    });
    Ok(Value::Null)
}

fn write_at(path: &Path, offset: Option<u64>, data: &[u8]) -> io::Result<()> {
    let mut file = match offset {
        None => OpenOptions::new().append(true).create(true).open(path)?,
        Some(offset) => {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(false)
                .open(path)?;
            file.seek(SeekFrom::Start(offset))?;
            file
        }
    };
    file.write_all(data)?;
    file.flush()
}

/// `delete(path, cb)`: remove a file or a directory tree. A missing path
/// is not an error.
fn delete(ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("delete", &args, 2)?;
    let path = resolve(ctx, "delete", &args)?;
    let cb = args::callback("delete", &args, 1)?;

    spawn_io(ctx, "delete", cb, move || {
        let result = match fs::symlink_metadata(&path) {
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(&path),
            Ok(_) => fs::remove_file(&path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        };
        match result {
            Ok(()) => events::end(),
            Err(err) => events::error(format!("could not delete {}: {err}", path.display())),
        }
    });
    Ok(Value::Null)
}

/// `stat(path, cb)`: `{name, len, dir, mod}` for the path, or `()` data if
/// nothing exists there.
fn stat(ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("stat", &args, 2)?;
    let path = resolve(ctx, "stat", &args)?;
    let cb = args::callback("stat", &args, 1)?;

    spawn_io(ctx, "stat", cb, move || match fs::metadata(&path) {
        Ok(meta) => events::data(file_info(&file_name(&path), &meta)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => events::data(Value::Null),
        Err(err) => events::error(format!("could not stat {}: {err}", path.display())),
    });
    Ok(Value::Null)
}

/// `dir(path, cb)`: a list of `{name, len, dir, mod}` entries sorted by
/// name.
fn dir(ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("dir", &args, 2)?;
    let path = resolve(ctx, "dir", &args)?;
    let cb = args::callback("dir", &args, 1)?;

    spawn_io(ctx, "dir", cb, move || match list_dir(&path) {
        Ok(entries) => events::data(entries),
        Err(err) => events::error(format!("could not list {}: {err}", path.display())),
    });
    Ok(Value::Null)
}

fn list_dir(path: &Path) -> io::Result<Value> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push((name, entry.metadata()?));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    let list: Composite = entries
        .iter()
        .enumerate()
        .map(|(i, (name, meta))| (i.to_string(), file_info(name, meta)))
        .collect();
    Ok(Value::Composite(list))
}

/// `make(path, cb)`: create a directory and any missing parents.
fn make(ctx: &Arc<Context>, args: Vec<Value>) -> EvalResult {
    args::require("make", &args, 2)?;
    let path = resolve(ctx, "make", &args)?;
    let cb = args::callback("make", &args, 1)?;

    spawn_io(ctx, "make", cb, move || match fs::create_dir_all(&path) {
        Ok(()) => events::end(),
        Err(err) => events::error(format!("could not create {}: {err}", path.display())),
    });
    Ok(Value::Null)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn file_info(name: &str, meta: &Metadata) -> Value {
    let modified = meta
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map_or(0.0, |d| d.as_secs_f64().floor());
    let info = Composite::new();
    info.set("name", Value::from(name));
    info.set("len", Value::Number(meta.len() as f64));
    info.set("dir", Value::Bool(meta.is_dir()));
    info.set("mod", Value::Number(modified));
    Value::Composite(info)
}
