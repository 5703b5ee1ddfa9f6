use reservoir_core::{
    Aggregate, AggregateRoot, Arg, BoundedLevel, DomainError, DomainResult, Entity, EntityId,
    Event,
};

/// Book identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BookId(pub EntityId);

impl BookId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for BookId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: Book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    progress: BoundedLevel<u32>,
    version: u64,
}

impl Book {
    /// Create an unread book.
    ///
    /// ```
    /// use reservoir_books::Book;
    ///
    /// let book = Book::new("Война и мир", "Лев Толстой", 1225).unwrap();
    /// assert_eq!(book.bookmark_page(), 0);
    /// ```
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
    ) -> DomainResult<Self> {
        Self::with_id(BookId::new(EntityId::new()), title, author, pages)
    }

    pub fn with_id(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
    ) -> DomainResult<Self> {
        let progress = BoundedLevel::empty(pages)
            .ok_or_else(|| DomainError::value("page count must be a positive integer"))?;
        Ok(Self {
            id,
            title: title.into(),
            author: author.into(),
            progress,
            version: 0,
        })
    }

    /// Create a book from loosely-typed arguments.
    ///
    /// ```
    /// use reservoir_books::Book;
    ///
    /// let err = Book::from_args(123, "Лев Толстой", 1225).unwrap_err();
    /// assert!(err.is_type());
    /// ```
    pub fn from_args(
        title: impl Into<Arg>,
        author: impl Into<Arg>,
        pages: impl Into<Arg>,
    ) -> DomainResult<Self> {
        let title = title.into().into_text("book title must be text")?;
        let author = author.into().into_text("book author must be text")?;
        let pages = pages
            .into()
            .positive_int("page count must be a positive integer")?;
        Self::new(title, author, pages)
    }

    pub fn id_typed(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn pages(&self) -> u32 {
        self.progress.capacity()
    }

    pub fn current_page(&self) -> u32 {
        self.progress.level()
    }

    pub fn pages_remaining(&self) -> u32 {
        self.progress.headroom()
    }

    pub fn is_finished(&self) -> bool {
        self.progress.is_full()
    }

    /// Read the next `num_pages` pages.
    ///
    /// ```
    /// use reservoir_books::Book;
    ///
    /// let mut book = Book::new("Война и мир", "Лев Толстой", 1225).unwrap();
    /// book.read_pages(100).unwrap();
    /// assert_eq!(book.bookmark_page(), 100);
    /// assert!(book.read_pages(2000).is_err());
    /// ```
    pub fn read_pages(&mut self, num_pages: u32) -> DomainResult<()> {
        self.execute(&BookCommand::ReadPages(ReadPages { num_pages }))?;
        Ok(())
    }

    /// The page the reader is on. Never fails, never mutates.
    pub fn bookmark_page(&self) -> u32 {
        self.progress.level()
    }
}

impl Entity for Book {
    type Id = BookId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Book {
    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: ReadPages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadPages {
    pub num_pages: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookCommand {
    ReadPages(ReadPages),
}

/// Event: PagesRead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagesRead {
    pub num_pages: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookEvent {
    PagesRead(PagesRead),
}

impl Event for BookEvent {
    fn event_type(&self) -> &'static str {
        match self {
            BookEvent::PagesRead(_) => "books.book.pages_read",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl Aggregate for Book {
    type Command = BookCommand;
    type Event = BookEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            BookEvent::PagesRead(e) => {
                self.progress.fill_saturating(e.num_pages);
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            BookCommand::ReadPages(cmd) => self.handle_read_pages(cmd),
        }
    }
}

impl Book {
    fn handle_read_pages(&self, cmd: &ReadPages) -> Result<Vec<BookEvent>, DomainError> {
        if cmd.num_pages == 0 {
            return Err(DomainError::value("number of pages must be a positive integer"));
        }
        if self.progress.checked_fill(cmd.num_pages).is_none() {
            return Err(DomainError::value("cannot read past the last page"));
        }
        Ok(vec![BookEvent::PagesRead(PagesRead {
            num_pages: cmd.num_pages,
        })])
    }
}
