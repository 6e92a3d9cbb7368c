//! Saved-page fixtures, one per source layout.
//!
//! All relative dates resolve against
//! [`fixed_now`](super::domain::fixed_now) (2024-01-12 10:00).

/// PSEL listing.
///
/// Three kept events: PSG-Lens (row-col table, today 21:00), Sinner-Alcaraz
/// (labeled rows, 13/01 14:30) and Arsenal-Chelsea (explicit labels with
/// percentages, live). Then a repeat of the PSG-Lens link, a one-competitor
/// event and an event whose prices are all suspended.
pub const PSEL_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Paris sportifs</title></head><body>
<main>
<psel-event-main class="psel-event">
  <a class="psel-event__link" href="/paris-football/france/ligue-1/3300308/psg-vs-lens">
    <span class="psel-opponent__name">PSG</span>
    <span class="psel-opponent__name">Lens</span>
  </a>
  <div class="psel-event-info">
    <span class="psel-event-info__competition">Ligue 1</span>
    <time class="psel-timer">Aujourd'hui 21h00</time>
  </div>
  <table class="psel-market psel-market--row-col">
    <tbody>
      <tr>
        <td><psel-outcome><button><span class="psel-outcome__data">1,45</span></button></psel-outcome></td>
        <td><psel-outcome><button><span class="psel-outcome__data">4,20</span></button></psel-outcome></td>
        <td><psel-outcome><button><span class="psel-outcome__data">6,50</span></button></psel-outcome></td>
      </tr>
    </tbody>
  </table>
</psel-event-main>

<psel-event-main class="psel-event">
  <a class="psel-event__link" href="/paris-tennis/atp/open/3300400/sinner-vs-alcaraz">
    <span class="psel-opponent__name">Sinner</span>
    <span class="psel-opponent__name">Alcaraz</span>
  </a>
  <div class="psel-event-info">
    <span class="psel-event-info__competition">ATP Open</span>
    <span class="psel-event-info__date">13/01 14h30</span>
  </div>
  <table class="psel-market">
    <tbody>
      <tr>
        <th scope="row">Sinner</th>
        <td><psel-outcome><button><span class="psel-outcome__data">1,80</span></button></psel-outcome></td>
      </tr>
      <tr>
        <th scope="row">Alcaraz</th>
        <td><psel-outcome><button><span class="psel-outcome__data">2,00</span></button></psel-outcome></td>
      </tr>
    </tbody>
  </table>
</psel-event-main>

<psel-event-live class="psel-event">
  <a class="psel-event__link" href="/paris-football/angleterre/premier-league/3300500/arsenal-vs-chelsea">
    <span class="psel-opponent__name">Arsenal</span>
    <span class="psel-opponent__name">Chelsea</span>
  </a>
  <div class="psel-event-info">
    <span class="psel-event-info__competition">Premier League</span>
    <time class="psel-timer">En direct</time>
  </div>
  <div class="psel-outcomes">
    <div class="psel-outcome-cell">
      <psel-outcome><button><span class="psel-outcome__label">Arsenal</span><span class="psel-outcome__data">2,10</span></button></psel-outcome>
      <span class="psel-progress-bar__counter">48%</span>
    </div>
    <div class="psel-outcome-cell">
      <psel-outcome><button><span class="psel-outcome__label">N</span><span class="psel-outcome__data">3,30</span></button></psel-outcome>
      <span class="psel-progress-bar__counter">27%</span>
    </div>
    <div class="psel-outcome-cell">
      <psel-outcome><button><span class="psel-outcome__label">Chelsea</span><span class="psel-outcome__data">3,40</span></button></psel-outcome>
      <span class="psel-progress-bar__counter">25%</span>
    </div>
  </div>
</psel-event-live>

<psel-event-main class="psel-event">
  <a class="psel-event__link" href="/paris-football/france/ligue-1/3300308/psg-vs-lens">
    <span class="psel-opponent__name">PSG</span>
    <span class="psel-opponent__name">Lens</span>
  </a>
  <table class="psel-market psel-market--row-col">
    <tbody>
      <tr>
        <td><psel-outcome><button><span class="psel-outcome__data">1,40</span></button></psel-outcome></td>
        <td><psel-outcome><button><span class="psel-outcome__data">4,50</span></button></psel-outcome></td>
        <td><psel-outcome><button><span class="psel-outcome__data">7,00</span></button></psel-outcome></td>
      </tr>
    </tbody>
  </table>
</psel-event-main>

<psel-event-main class="psel-event">
  <a class="psel-event__link" href="/paris-golf/pga/3300600/open-championship">
    <span class="psel-opponent__name">Open Championship</span>
  </a>
  <table class="psel-market">
    <tbody>
      <tr>
        <th scope="row">Scheffler</th>
        <td><psel-outcome><button><span class="psel-outcome__data">5,00</span></button></psel-outcome></td>
      </tr>
    </tbody>
  </table>
</psel-event-main>

<psel-event-main class="psel-event">
  <a class="psel-event__link" href="/paris-football/france/ligue-1/3300700/lyon-vs-nice">
    <span class="psel-opponent__name">Lyon</span>
    <span class="psel-opponent__name">Nice</span>
  </a>
  <table class="psel-market psel-market--row-col">
    <tbody>
      <tr>
        <td><psel-outcome><button><span class="psel-outcome__data">-</span></button></psel-outcome></td>
        <td><psel-outcome><button><span class="psel-outcome__data">-</span></button></psel-outcome></td>
        <td><psel-outcome><button><span class="psel-outcome__data">-</span></button></psel-outcome></td>
      </tr>
    </tbody>
  </table>
</psel-event-main>
</main>
</body></html>"#;

/// Betclic listing.
///
/// Two kept events: PSG-Lens (explicit button labels, today 21:00) and
/// Lyon-Nice (positional labels, a short trailing group, tomorrow 20:45).
/// A third card has no buttons at all.
pub const BETCLIC_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Betclic</title></head><body>
<sports-events-event-card>
  <a class="cardEvent" href="/football-s1/ligue-1-uber-eats-c4/psg-lens-m1001">
    <div class="scoreboard">
      <div class="scoreboard_contestantLabel">PSG</div>
      <div class="scoreboard_contestantLabel">Lens</div>
      <div class="scoreboard_info">
        <span class="scoreboard_date">Aujourd'hui</span>
        <span class="scoreboard_hour">21:00</span>
      </div>
    </div>
  </a>
  <bcdk-breadcrumb><span class="breadcrumb_itemLabel">Ligue 1</span></bcdk-breadcrumb>
  <div class="market_odds">
    <button class="btn is-odd"><span class="btn_label is-top"><span>PSG</span></span><span class="btn_label">1,50</span></button>
    <button class="btn is-odd"><span class="btn_label is-top"><span>Nul</span></span><span class="btn_label">4,10</span></button>
    <button class="btn is-odd"><span class="btn_label is-top">Lens</span><span class="btn_label">6,25</span></button>
  </div>
</sports-events-event-card>

<sports-events-event-card>
  <a class="cardEvent" href="/football-s1/ligue-1-uber-eats-c4/lyon-nice-m1002">
    <div class="scoreboard">
      <div class="scoreboard_contestantLabel">Lyon</div>
      <div class="scoreboard_contestantLabel">Nice</div>
      <div class="scoreboard_info">
        <span class="scoreboard_date">Demain</span>
        <span class="scoreboard_hour">20:45</span>
      </div>
    </div>
  </a>
  <bcdk-breadcrumb><span class="breadcrumb_itemLabel">Ligue 1</span></bcdk-breadcrumb>
  <div class="market_odds">
    <button class="btn is-odd"><span class="btn_label">2,05</span></button>
    <button class="btn is-odd"><span class="btn_label">3,40</span></button>
    <button class="btn is-odd"><span class="btn_label">3,60</span></button>
    <button class="btn is-odd"><span class="btn_label">9,99</span></button>
  </div>
</sports-events-event-card>

<sports-events-event-card>
  <a class="cardEvent" href="/football-s1/ligue-1-uber-eats-c4/nantes-brest-m1003">
    <div class="scoreboard">
      <div class="scoreboard_contestantLabel">Nantes</div>
      <div class="scoreboard_contestantLabel">Brest</div>
    </div>
  </a>
</sports-events-event-card>
</body></html>"#;

/// Exchange host page: only the embedded frame element.
pub const EXCHANGE_HOST_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<div class="layout">
  <iframe id="exchange-section" src="https://exchange.piwi247.com/customer/inplay"></iframe>
</div>
</body></html>"#;

/// Exchange frame content.
///
/// One kept row: PSG-Lens with three selections (back and lay, back only,
/// back and lay without stake). A row lacking its market id and a row whose
/// cells are all empty are dropped.
pub const EXCHANGE_FRAME: &str = r#"<html><body>
<div class="biab_group-markets-table-row" data-event-id="33012345" data-market-id="1.223344">
  <div class="biab_market-title-team-names"><p>PSG</p><p>Lens</p></div>
  <div class="_betContent__wrapper_1rfne_1">
    <div class="betContentContainer" data-selection-id="47972">
      <div class="biab_back-cell"><div class="biab_bet-content"><span class="betOdds">1.48</span><span class="betAmount">250</span></div></div>
      <div class="biab_lay-cell"><div class="biab_bet-content"><span class="betOdds">1.50</span><span class="betAmount">120</span></div></div>
    </div>
    <div class="betContentContainer" data-selection-id="58805">
      <div class="biab_back-cell"><div class="biab_bet-content"><span class="betOdds">4.3</span><span class="betAmount">40</span></div></div>
      <div class="biab_lay-cell"><div class="biab_bet-content"> </div></div>
    </div>
    <div class="betContentContainer" data-selection-id="47973">
      <div class="biab_back-cell"><div class="biab_bet-content"><span class="betOdds">6.8</span></div></div>
      <div class="biab_lay-cell"><div class="biab_bet-content"><span class="betOdds">7.0</span></div></div>
    </div>
  </div>
</div>
<div class="biab_group-markets-table-row" data-event-id="33012399">
  <div class="biab_market-title-team-names"><p>Lille</p><p>Rennes</p></div>
  <div class="_betContent__wrapper_1rfne_1">
    <div class="betContentContainer" data-selection-id="1">
      <div class="biab_back-cell"><div class="biab_bet-content"><span class="betOdds">2.0</span></div></div>
    </div>
  </div>
</div>
<div class="biab_group-markets-table-row" data-event-id="33012400" data-market-id="1.223355">
  <div class="biab_market-title-team-names"><p>Monaco</p><p>Reims</p></div>
  <div class="_betContent__wrapper_1rfne_1">
    <div class="betContentContainer" data-selection-id="2">
      <div class="biab_back-cell"><div class="biab_bet-content"></div></div>
      <div class="biab_lay-cell"><div class="biab_bet-content"></div></div>
    </div>
  </div>
</div>
</body></html>"#;

/// Unibet listing: one event with a combined title, three prices.
pub const UNIBET_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<section class="events">
  <div class="event-card" data-event-id="u-1203">
    <a href="/sport/football/france/ligue-1/psg-lens">
      <span class="event-title">PSG - Lens</span>
    </a>
    <div class="odds-container">
      <span class="odds-btn">1,47</span>
      <span class="odds-btn">4,30</span>
      <span class="odds-btn">6,00</span>
    </div>
  </div>
</section>
</body></html>"#;

/// PMU listing: a two-way event and one without any price.
pub const PMU_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<div class="race-card">
  <a href="/paris-sportifs/tennis/m-42">
    <h3 class="race-title">Sinner vs Alcaraz</h3>
  </a>
  <div class="cotes-group"><span class="cote">1,85</span><span class="cote">1,95</span></div>
</div>
<div class="race-card">
  <h3 class="race-title">Medvedev vs Zverev</h3>
  <div class="cotes-group"><span class="cote">SUSP</span><span class="cote">SUSP</span></div>
</div>
</body></html>"#;
