use common::error::{LookupError, SendError};
use common::forms::autocomplete::{DebounceTicket, LookupGeneration};
use common::forms::validation::Field;
use common::model::address::AddressCandidate;

pub enum Msg {
    FullNameChanged(String),
    EmailChanged(String),
    CityChanged(String),
    PostalCodeChanged(String),
    AddressChanged(String),
    MessageChanged(String),
    TermsChanged(bool),
    Touched(Field),
    AddressSettled(DebounceTicket),
    SuggestionsLoaded(LookupGeneration, Result<Vec<AddressCandidate>, LookupError>),
    SelectSuggestion(usize),
    AddressBlurred,
    HideSuggestions,
    Submit,
    SubmitFinished(Result<(), SendError>),
}
