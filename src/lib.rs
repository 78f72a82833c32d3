pub mod core;
pub mod analysis;
pub mod index;
pub mod query;
pub mod search;
pub mod morphology;
pub mod render;

/*
┌──────────────────────────────────────────────────────────────────────────────────┐
│                            VLASISKU STRUCT ARCHITECTURE                           │
└──────────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────────── CORE LAYER ──────────────────────────────────┐
│                                                                                    │
│  ┌──────────────────────────────────────────────────────────────────────────┐    │
│  │                           struct Dictionary                               │    │
│  │  config: Config                      // Build and lookup settings         │    │
│  │  current: RwLock<Arc<IndexSnapshot>> // Swapped whole on rebuild          │    │
│  │  generation: AtomicU64               // Snapshot version                  │    │
│  └──────────────────────────────────────────────────────────────────────────┘    │
│                                                                                    │
│  ┌────────────────────┐  ┌────────────────────┐  ┌─────────────────────────┐     │
│  │ struct Entry       │  │ struct Gloss       │  │ struct CorpusTables     │     │
│  │ • word, entry_type │  │ • text             │  │ • class_scales          │     │
│  │ • affixes          │  │ • entry: EntryId   │  │ • cll                   │     │
│  │ • search_affixes   │  │ • sense, place     │  │ • terminators           │     │
│  │ • grammar_class    │  └────────────────────┘  └─────────────────────────┘     │
│  │ • definition,notes │                                                          │
│  └────────────────────┘                                                          │
└────────────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────── RELATIONSHIPS ─────────────────────────────────┐
│                                                                                    │
│  Dictionary ──owns──> IndexSnapshot <──builds── IndexBuilder                      │
│     │                     │                         │                             │
│     │                     │                         ├──uses──> Analyzer (stems)   │
│     │                     │                         └──uses──> Markup (display)   │
│     │                     │                                                       │
│     │                     ├──contains──> StemIndex (definitions, notes, glosses)  │
│     │                     └──contains──> PrefixIndex (completion)                 │
│     │                                                                             │
│     └──reads_with──> QueryResolver                                                │
│                          ├──falls_back_to──> MorphemeDecomposer                   │
│                          └──falls_back_to──> FuzzyAutomaton                       │
│                                                                                    │
└────────────────────────────────────────────────────────────────────────────────────┘
*/
